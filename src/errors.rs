use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("node {0} is already in the queue")]
    DuplicateNode(String), // push on a live node, use update instead
    #[error("node {0} is not in the queue")]
    MissingNode(String), // update on a node that was never pushed or was popped
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {0} has a negative weight")]
    NegativeWeight(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("frontier invariant violated: {0}")]
    Queue(#[from] QueueError),
}
