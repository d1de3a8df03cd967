use crate::regex_limits::NSUBEXP;

/// Byte offsets of the whole match (slot 0) and of each capture group
/// (slots 1..=9) in the text that was searched.
///
/// A slot is `None` when its group did not take part in the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submatches {
    pub(crate) starts: [Option<usize>; NSUBEXP],
    pub(crate) ends: [Option<usize>; NSUBEXP],
}

impl Submatches {
    #[inline]
    pub fn start(&self, n: usize) -> Option<usize> {
        self.starts.get(n).copied().flatten()
    }

    #[inline]
    pub fn end(&self, n: usize) -> Option<usize> {
        self.ends.get(n).copied().flatten()
    }

    /// `(start, end)` of slot `n`, only when both ends are recorded.
    pub fn span(&self, n: usize) -> Option<(usize, usize)> {
        let start = self.start(n)?;
        let end = self.end(n)?;
        (start <= end).then_some((start, end))
    }

    /// Text of slot `n`, sliced out of the text that was searched.
    pub fn get<'t>(&self, n: usize, text: &'t str) -> Option<&'t str> {
        let (start, end) = self.span(n)?;
        text.get(start..end)
    }

    /// Slots that took part in the match, as `(n, start, end)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (0..NSUBEXP).filter_map(|n| self.span(n).map(|(s, e)| (n, s, e)))
    }
}
