//! Indicator dots under the carousel, one per item.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotIndicators {
    highlighted: Vec<bool>,
}

impl DotIndicators {
    pub fn new(count: usize) -> Self {
        Self {
            highlighted: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.highlighted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty()
    }

    pub fn states(&self) -> &[bool] {
        &self.highlighted
    }

    pub fn active(&self) -> Option<usize> {
        self.highlighted.iter().position(|&on| on)
    }

    /// Highlight exactly `active`; anything out of range clears them all.
    /// Returns whether any dot changed.
    pub fn render(&mut self, active: Option<usize>) -> bool {
        let mut changed = false;
        for (index, on) in self.highlighted.iter_mut().enumerate() {
            let want = Some(index) == active;
            changed |= *on != want;
            *on = want;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_highlighted() {
        let mut dots = DotIndicators::new(5);
        assert!(dots.render(Some(3)));
        assert_eq!(dots.states(), &[false, false, false, true, false]);
        assert!(dots.render(Some(0)));
        assert_eq!(dots.active(), Some(0));
        assert_eq!(dots.states().iter().filter(|&&on| on).count(), 1);
    }

    #[test]
    fn rerender_is_idempotent() {
        let mut dots = DotIndicators::new(5);
        dots.render(Some(2));
        assert!(!dots.render(Some(2)));
    }

    #[test]
    fn out_of_range_clears() {
        let mut dots = DotIndicators::new(5);
        dots.render(Some(1));
        assert!(dots.render(Some(7)));
        assert_eq!(dots.active(), None);
        dots.render(Some(1));
        dots.render(None);
        assert_eq!(dots.active(), None);
    }
}
