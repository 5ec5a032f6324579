//! Pagination policy shared by every list operation.

/// Pagination parameters as recognized at the transport boundary.
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// rows per page
    pub limit: u32,
}

impl Pagination {
    /// Normalize to a `(limit, offset)` pair for the query layer.
    ///
    /// Page 0 is treated as page 1 and `limit` is clamped to `1..=100`.
    /// Out-of-contract input is rejected at the validation boundary before
    /// it reaches this point; the clamp only guards internal callers.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let limit = u64::from(self.limit.clamp(1, 100));
        (limit, (u64::from(page) - 1) * limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_values() {
        let (limit, offset) = Pagination { page: 0, limit: 0 }.normalize();
        assert_eq!(limit, 1);
        assert_eq!(offset, 0);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (limit, offset) = Pagination { page: 5, limit: 1000 }.normalize();
        assert_eq!(limit, 100);
        assert_eq!(offset, 400);
    }

    #[test]
    fn offset_skips_full_pages() {
        let (limit, offset) = Pagination { page: 3, limit: 10 }.normalize();
        assert_eq!(limit, 10);
        assert_eq!(offset, 20);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.limit, 10);
    }
}
