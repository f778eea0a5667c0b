use thiserror::Error;

use crate::Grid;

/// A single input/output pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    pub input: Grid,
    pub output: Grid,
}

impl Example {
    #[must_use]
    pub fn new(input: Grid, output: Grid) -> Self {
        Self { input, output }
    }
}

/// Errors that can occur when constructing a task.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    #[error("task has no training examples")]
    NoTrainingExamples,
}

/// A named puzzle instance.
///
/// Training examples are the only evidence used to propose hypotheses.
/// Held-out examples take part in final acceptance but never in proposal.
/// A task always has at least one training example.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTask"))]
pub struct Task {
    #[cfg_attr(feature = "serde", serde(default))]
    id: String,
    train: Vec<Example>,
    #[cfg_attr(feature = "serde", serde(default))]
    test: Vec<Example>,
}

impl Task {
    /// Creates a task from training and held-out examples.
    ///
    /// # Errors
    ///
    /// Returns an error if `train` is empty.
    pub fn new(
        id: impl Into<String>,
        train: Vec<Example>,
        test: Vec<Example>,
    ) -> Result<Self, TaskError> {
        if train.is_empty() {
            return Err(TaskError::NoTrainingExamples);
        }
        Ok(Self {
            id: id.into(),
            train,
            test,
        })
    }

    /// Returns a copy of the task with a new id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn train(&self) -> &[Example] {
        &self.train
    }

    #[must_use]
    pub fn test(&self) -> &[Example] {
        &self.test
    }

    /// Returns the first training example, the one hypotheses are drawn from.
    #[must_use]
    pub fn first(&self) -> &Example {
        &self.train[0]
    }

    /// Iterates over the training examples followed by the held-out examples.
    pub fn examples(&self) -> impl Iterator<Item = &Example> {
        self.train.iter().chain(&self.test)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTask {
    #[serde(default)]
    id: String,
    train: Vec<Example>,
    #[serde(default)]
    test: Vec<Example>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTask> for Task {
    type Error = TaskError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        Task::new(raw.id, raw.train, raw.test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(input: u8, output: u8) -> Example {
        Example::new(
            Grid::new(vec![vec![input]]).unwrap(),
            Grid::new(vec![vec![output]]).unwrap(),
        )
    }

    #[test]
    fn rejects_tasks_without_training_examples() {
        let err = Task::new("empty", vec![], vec![example(1, 1)]).unwrap_err();
        assert_eq!(err, TaskError::NoTrainingExamples);
    }

    #[test]
    fn examples_visit_train_then_test() {
        let task = Task::new(
            "t",
            vec![example(1, 2), example(3, 4)],
            vec![example(5, 6)],
        )
        .unwrap();

        let inputs: Vec<_> = task.examples().map(|e| e.input.cells()[0]).collect();
        assert_eq!(inputs, vec![1, 3, 5]);
        assert_eq!(task.first(), &example(1, 2));
        assert_eq!(task.id(), "t");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_through_validation() {
        let json = r#"{"train": [{"input": [[1, 2]], "output": [[2, 1]]}], "test": []}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.train().len(), 1);
        assert_eq!(task.first().output.cells(), &[2, 1]);

        let ragged = r#"{"train": [{"input": [[1, 2], [3]], "output": [[1]]}]}"#;
        assert!(serde_json::from_str::<Task>(ragged).is_err());

        let empty = r#"{"train": []}"#;
        assert!(serde_json::from_str::<Task>(empty).is_err());
    }
}
