use serde::Serialize;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// 分页参数及总数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

impl Paging {
    /// 缺省或非正数时使用第 1 页、每页 10 条；limit 不超过 max_limit
    pub fn new(page: Option<i64>, limit: Option<i64>, max_limit: i64) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(max_limit.max(1));

        Self {
            page,
            limit,
            total: 0,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_or_non_positive() {
        assert_eq!(Paging::new(None, None, 100), Paging::new(Some(0), Some(-5), 100));
        let paging = Paging::new(Some(-1), Some(0), 100);
        assert_eq!(paging.page, 1);
        assert_eq!(paging.limit, 10);
        assert_eq!(paging.offset(), 0);
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Paging::new(Some(2), Some(10), 100).offset(), 10);
        assert_eq!(Paging::new(Some(3), Some(25), 100).offset(), 50);
    }

    #[test]
    fn clamps_limit() {
        assert_eq!(Paging::new(Some(1), Some(500), 100).limit, 100);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let paging = Paging::new(Some(i64::MAX), Some(100), 100);
        assert_eq!(paging.offset(), i64::MAX);
    }
}
