#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AverageError {
    #[error("cannot average an empty sequence")]
    EmptyInput,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BenchError {
    #[error(transparent)]
    Average(#[from] AverageError),
    #[error("at least one measured run is required")]
    NoRuns,
}
