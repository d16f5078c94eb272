/// Which member of a segment's derivative chain to address.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DerivativeOrder {
    Value,
    First,
    Second,
    Third
}

impl DerivativeOrder {
    pub const ALL: [DerivativeOrder; 4] = [
        DerivativeOrder::Value,
        DerivativeOrder::First,
        DerivativeOrder::Second,
        DerivativeOrder::Third
    ];

    /// Number of differentiations applied to the segment function.
    pub fn degree(&self) -> usize {
        match self {
            DerivativeOrder::Value  => 0,
            DerivativeOrder::First  => 1,
            DerivativeOrder::Second => 2,
            DerivativeOrder::Third  => 3,
        }
    }
}
