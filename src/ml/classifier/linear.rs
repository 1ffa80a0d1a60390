//! Linear decision-function classifiers.
//!
//! Covers every model whose prediction is `argmax_k(w_k · x + b_k)`: logistic
//! regression, linear SVMs, SGD, passive-aggressive and ridge classifiers.
//! Binary models carry one weight row; a positive score selects `classes[1]`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Classifier, argmax, check_dimension, sparse_dot, validate_matrix};
use crate::error::{Result, TriageError};
use crate::ml::vectorizer::FeatureVector;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    /// Create a validated classifier.
    pub fn new(classes: Vec<i64>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self> {
        let classifier = Self {
            classes,
            coef,
            intercept,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    /// Check shapes and values. Called for every deserialized artifact.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(TriageError::artifact("linear model has no classes"));
        }
        validate_matrix("coef", &self.coef)?;

        let rows = self.coef.len();
        let binary = rows == 1 && self.classes.len() == 2;
        if !binary && rows != self.classes.len() {
            return Err(TriageError::artifact(format!(
                "linear model has {rows} coef rows for {} classes",
                self.classes.len()
            )));
        }
        if self.intercept.len() != rows {
            return Err(TriageError::artifact(format!(
                "linear model has {} intercepts for {rows} coef rows",
                self.intercept.len()
            )));
        }
        if self.intercept.iter().any(|v| !v.is_finite()) {
            return Err(TriageError::artifact(
                "linear model intercept contains a non-finite value",
            ));
        }
        Ok(())
    }

    /// Raw decision scores, one per coef row.
    pub fn decision_function(&self, vector: &FeatureVector) -> Result<Vec<f64>> {
        check_dimension(vector, self.num_features())?;
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| sparse_dot(vector, row) + b)
            .collect())
    }

    fn predict_one(&self, vector: &FeatureVector) -> Result<i64> {
        let scores = self.decision_function(vector)?;
        let index = if scores.len() == 1 && self.classes.len() == 2 {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
        };
        debug!("linear scores {scores:?} → class index {index}");
        Ok(self.classes[index])
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, vectors: &[FeatureVector]) -> Result<Vec<i64>> {
        vectors.iter().map(|v| self.predict_one(v)).collect()
    }

    fn num_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use sprs::CsVec;

    use super::*;

    fn multiclass() -> LinearClassifier {
        LinearClassifier::new(
            vec![0, 1, 2],
            vec![
                vec![2.0, -0.5, -0.5],
                vec![-0.5, 2.0, -0.5],
                vec![-0.5, -0.5, 2.0],
            ],
            vec![0.0, 0.0, 0.1],
        )
        .unwrap()
    }

    #[test]
    fn test_multiclass_argmax() {
        let model = multiclass();
        let vectors = vec![
            CsVec::new(3, vec![0], vec![1.0]),
            CsVec::new(3, vec![1, 2], vec![0.8, 0.2]),
            CsVec::new(3, vec![], vec![]),
        ];
        // the zero vector is decided by the intercept alone
        assert_eq!(model.predict(&vectors).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_ties_pick_first_class() {
        let model = LinearClassifier::new(
            vec![7, 8, 9],
            vec![vec![1.0], vec![1.0], vec![0.0]],
            vec![0.0, 0.0, 0.0],
        )
        .unwrap();
        let v = CsVec::new(1, vec![0], vec![1.0]);
        assert_eq!(model.predict(&[v]).unwrap(), vec![7]);
    }

    #[test]
    fn test_binary_model() {
        let model =
            LinearClassifier::new(vec![-1, 1], vec![vec![1.0, -1.0]], vec![0.0]).unwrap();
        let positive = CsVec::new(2, vec![0], vec![1.0]);
        let negative = CsVec::new(2, vec![1], vec![1.0]);
        let zero = CsVec::new(2, vec![], vec![]);
        assert_eq!(
            model.predict(&[positive, negative, zero]).unwrap(),
            vec![1, -1, -1]
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let model = multiclass();
        let v = CsVec::new(5, vec![0], vec![1.0]);
        let err = model.predict(&[v]).unwrap_err();
        assert!(matches!(
            err,
            TriageError::Dimension {
                expected: 3,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_shape_validation() {
        assert!(LinearClassifier::new(vec![], vec![vec![1.0]], vec![0.0]).is_err());
        assert!(LinearClassifier::new(vec![0, 1, 2], vec![vec![1.0]; 2], vec![0.0; 2]).is_err());
        assert!(LinearClassifier::new(vec![0, 1], vec![vec![1.0]], vec![0.0, 0.0]).is_err());
        assert!(LinearClassifier::new(vec![0, 1], vec![vec![1.0]], vec![f64::NAN]).is_err());
        assert!(LinearClassifier::new(vec![0], vec![vec![1.0]], vec![0.0]).is_ok());
    }
}
