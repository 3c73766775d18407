//! 정수 리스트에 대한 집계, 폴드로 표현
//! (Aggregates over persistent lists of integers, expressed as folds).

use fp_common::List;

use crate::error::TailRecError;

/// 모든 원소의 합 (Sum of all elements); `0` for the empty list.
///
/// # 예시 (Examples)
/// ```
/// use fp_common::list;
/// use fp_tailrec::aggregate::sum;
/// assert_eq!(sum(&list![1, 2, 3]), Ok(6));
/// ```
pub fn sum(list: &List<u64>) -> Result<u64, TailRecError> {
    list.fold_left(Some(0u64), |acc, x| acc?.checked_add(*x))
        .ok_or(TailRecError::Overflow {
            operation: "sum",
            input: list.len() as u64,
        })
}

/// 모든 원소의 곱 (Product of all elements); `1` for the empty list.
pub fn product(list: &List<u64>) -> Result<u64, TailRecError> {
    list.fold_left(Some(1u64), |acc, x| acc?.checked_mul(*x))
        .ok_or(TailRecError::Overflow {
            operation: "product",
            input: list.len() as u64,
        })
}

/// 산술 평균 (Arithmetic mean). The empty list has none.
///
/// # 오류 (Errors)
/// [`TailRecError::List`] wrapping `EmptyListAccess` for the empty list.
pub fn average(list: &List<u64>) -> Result<f64, TailRecError> {
    list.head()?;
    let total = list.fold_left(0.0, |acc, x| acc + *x as f64);
    Ok(total / list.len() as f64)
}
