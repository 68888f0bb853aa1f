/// Offset and size of one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of messages to skip (0-based offset)
    pub skip: u64,

    /// Maximum messages per page, always at least 1
    pub limit: u32,
}

impl PageRequest {
    /// First page for the given page size. A size of 0 is raised to 1.
    pub fn new(limit: u32) -> Self {
        Self {
            skip: 0,
            limit: limit.max(1),
        }
    }

    /// Set the offset (builder pattern)
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Set the page size (builder pattern)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// The request for the page following this one
    pub fn next(self) -> Self {
        Self {
            skip: self.skip + u64::from(self.limit),
            ..self
        }
    }

    pub(crate) fn query(&self) -> [(&'static str, u64); 2] {
        [("skip", self.skip), ("limit", u64::from(self.limit))]
    }
}
