use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    #[error("invalid polynomial order {0}")]
    InvalidOrder(usize),
    #[error("invalid polynomial params: coefficient sequence is empty")]
    InvalidParams
}
