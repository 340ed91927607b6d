use crate::fp::{EncodeError, Item};
use ndarray::{Array2, ArrayView2};
use std::collections::HashMap;

/// One-hot view of transactions against a fitted vocabulary.
///
/// Columns are the sorted unique items seen by [`fit`](Self::fit); row `i`,
/// column `j` is `true` when transaction `i` contains `columns()[j]`.
#[derive(Debug, Clone)]
pub struct TransactionEncoder<T> {
    columns: Vec<T>,
    columns_mapping: HashMap<T, usize>,
}

impl<T: Item> TransactionEncoder<T> {
    pub fn fit<S: AsRef<[T]>>(transactions: &[S]) -> Self {
        let mut columns: Vec<T> = transactions
            .iter()
            .flat_map(|transaction| transaction.as_ref().iter().cloned())
            .collect();
        columns.sort_unstable();
        columns.dedup();

        let columns_mapping = columns
            .iter()
            .enumerate()
            .map(|(col_idx, item)| (item.clone(), col_idx))
            .collect();

        Self {
            columns,
            columns_mapping,
        }
    }

    pub fn columns(&self) -> &[T] {
        &self.columns
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.columns_mapping.get(item).copied()
    }

    pub fn transform<S: AsRef<[T]>>(&self, transactions: &[S]) -> Result<Array2<bool>, EncodeError> {
        let mut array = Array2::from_elem((transactions.len(), self.columns.len()), false);

        for (row_idx, transaction) in transactions.iter().enumerate() {
            for item in transaction.as_ref() {
                let col_idx = self.index_of(item).ok_or_else(|| EncodeError::UnknownItem {
                    transaction: row_idx,
                    item: format!("{:?}", item),
                })?;
                array[[row_idx, col_idx]] = true;
            }
        }

        Ok(array)
    }

    /// Decodes rows back into item lists, items in column order.
    pub fn inverse_transform(&self, array: ArrayView2<bool>) -> Result<Vec<Vec<T>>, EncodeError> {
        let num_columns = array.ncols();
        if num_columns != self.columns.len() {
            return Err(EncodeError::ShapeMismatch {
                expected: self.columns.len(),
                found: num_columns,
            });
        }

        Ok(array
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .zip(&self.columns)
                    .filter(|&(&cell, _)| cell)
                    .map(|(_, item)| item.clone())
                    .collect()
            })
            .collect())
    }

    pub fn fit_transform<S: AsRef<[T]>>(
        transactions: &[S],
    ) -> Result<(Self, Array2<bool>), EncodeError> {
        let encoder = Self::fit(transactions);
        let array = encoder.transform(transactions)?;
        Ok((encoder, array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn dataset() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Apple", "Beer", "Rice", "Chicken"],
            vec!["Apple", "Beer", "Rice"],
            vec!["Apple", "Beer"],
            vec!["Apple", "Bananas"],
            vec!["Milk", "Beer", "Rice", "Chicken"],
            vec!["Milk", "Beer", "Rice"],
            vec!["Milk", "Beer"],
            vec!["Apple", "Bananas"],
        ]
    }

    fn expected_array() -> Array2<bool> {
        array![
            [true, false, true, true, false, true],
            [true, false, true, false, false, true],
            [true, false, true, false, false, false],
            [true, true, false, false, false, false],
            [false, false, true, true, true, true],
            [false, false, true, false, true, true],
            [false, false, true, false, true, false],
            [true, true, false, false, false, false],
        ]
    }

    #[test]
    fn test_fit_learns_sorted_columns() {
        let encoder = TransactionEncoder::fit(&dataset());
        assert_eq!(
            encoder.columns(),
            &["Apple", "Bananas", "Beer", "Chicken", "Milk", "Rice"]
        );
        assert_eq!(encoder.index_of(&"Milk"), Some(4));
        assert_eq!(encoder.index_of(&"Bread"), None);
    }

    #[test]
    fn test_transform() {
        let data = dataset();
        let encoder = TransactionEncoder::fit(&data);
        assert_eq!(encoder.transform(&data).unwrap(), expected_array());
    }

    #[test]
    fn test_inverse_transform() {
        let data = dataset();
        let encoder = TransactionEncoder::fit(&data);
        let decoded = encoder.inverse_transform(expected_array().view()).unwrap();

        let sorted: Vec<Vec<&str>> = data
            .into_iter()
            .map(|mut tx| {
                tx.sort();
                tx
            })
            .collect();
        assert_eq!(decoded, sorted);
    }

    #[test]
    fn test_fit_transform() {
        let (encoder, array) = TransactionEncoder::fit_transform(&dataset()).unwrap();
        assert_eq!(encoder.columns().len(), 6);
        assert_eq!(array, expected_array());
    }

    #[test]
    fn test_unknown_item_reports_transaction() {
        let encoder = TransactionEncoder::fit(&dataset());
        let err = encoder
            .transform(&[vec!["Apple"], vec!["Beer", "Bread"]])
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownItem {
                transaction: 1,
                item: "\"Bread\"".to_string()
            }
        );
    }

    #[test]
    fn test_inverse_transform_shape_mismatch() {
        let encoder = TransactionEncoder::fit(&dataset());
        let narrow = Array2::from_elem((2, 3), true);
        assert_eq!(
            encoder.inverse_transform(narrow.view()),
            Err(EncodeError::ShapeMismatch { expected: 6, found: 3 })
        );
    }

    #[test]
    fn test_empty_transactions() {
        let empty: Vec<Vec<u32>> = Vec::new();
        let (encoder, array) = TransactionEncoder::fit_transform(&empty).unwrap();
        assert!(encoder.columns().is_empty());
        assert_eq!(array.dim(), (0, 0));
        assert!(encoder.inverse_transform(array.view()).unwrap().is_empty());
    }
}
