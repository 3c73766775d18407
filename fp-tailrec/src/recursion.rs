//! 프로시저와 그들이 생성하는 프로세스, 스택 안전 버전
//! (Procedures and the processes they generate, made stack-safe).
//!
//! Each procedure here is written the way it reads in Scheme, as a
//! self-call in tail position carrying its state in accumulators. Rust does
//! not eliminate tail calls, so the self-call is wrapped in
//! [`suspend`] and the whole chain is driven by [`Trampoline::evaluate`].
//! Arithmetic is checked; overflow surfaces as [`TailRecError::Overflow`]
//! instead of wrapping.

use fp_common::List;
use fp_common::trampoline::{Trampoline, done, suspend};

use crate::error::TailRecError;

/// 한 단계에 1씩 옮기며 `a`에 `b`를 더한다
/// (Adds `b` to `a` one unit at a time, one suspended step per unit).
///
/// Deliberately linear in `b`: it exists to show that a million nested
/// calls run in constant stack.
///
/// # Scheme equivalent
/// ```scheme
/// (define (add a b)
///   (if (= b 0) a (add (+ a 1) (- b 1))))
/// ```
///
/// # 예시 (Examples)
/// ```
/// use fp_tailrec::recursion::add;
/// assert_eq!(add(3, 1_000_000), Ok(1_000_003));
/// ```
pub fn add(a: u64, b: u64) -> Result<u64, TailRecError> {
    fn add_iter(a: u64, b: u64) -> Trampoline<'static, Option<u64>> {
        if b == 0 {
            return done(Some(a));
        }
        match a.checked_add(1) {
            Some(next) => suspend(move || add_iter(next, b - 1)),
            None => done(None),
        }
    }
    add_iter(a, b)
        .evaluate()
        .ok_or(TailRecError::Overflow { operation: "add", input: b })
}

/// 선형 반복 프로세스를 사용한 팩토리얼 (Factorial using a linear iterative process).
/// `34!`까지 `u128`에 들어간다 (Fits `u128` up to `34!`).
///
/// # 예시 (Examples)
/// ```
/// use fp_tailrec::recursion::factorial;
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(35).is_err());
/// ```
pub fn factorial(n: u64) -> Result<u128, TailRecError> {
    fn fact_iter(product: u128, counter: u64, max_count: u64) -> Trampoline<'static, Option<u128>> {
        if counter > max_count {
            return done(Some(product));
        }
        match product.checked_mul(u128::from(counter)) {
            Some(next) => suspend(move || fact_iter(next, counter + 1, max_count)),
            None => done(None),
        }
    }
    fact_iter(1, 1, n)
        .evaluate()
        .ok_or(TailRecError::Overflow { operation: "factorial", input: n })
}

/// 반복 프로세스를 사용한 피보나치 (Fibonacci using an iterative process).
/// 선형 시간, 상수 스택 (Linear time, constant stack). Fits `u128` up to `F(186)`.
///
/// # 예시 (Examples)
/// ```
/// use fp_tailrec::recursion::fib;
/// assert_eq!(fib(10), Ok(55));
/// ```
pub fn fib(n: u64) -> Result<u128, TailRecError> {
    // a = F(k), b = F(k + 1). F(k + 2) is only computed when it is needed.
    fn fib_iter(a: u128, b: u128, count: u64) -> Trampoline<'static, Option<u128>> {
        match count {
            0 => done(Some(a)),
            1 => done(Some(b)),
            _ => match a.checked_add(b) {
                Some(next) => suspend(move || fib_iter(b, next, count - 1)),
                None => done(None),
            },
        }
    }
    fib_iter(0, 1, n)
        .evaluate()
        .ok_or(TailRecError::Overflow { operation: "fib", input: n })
}

/// 유클리드 호제법을 사용한 최대공약수(GCD)
/// (Greatest common divisor using Euclid's algorithm).
///
/// # 예시 (Examples)
/// ```
/// use fp_tailrec::recursion::gcd;
/// assert_eq!(gcd(206, 40), 2);
/// ```
pub fn gcd(a: u64, b: u64) -> u64 {
    fn gcd_iter(a: u64, b: u64) -> Trampoline<'static, u64> {
        if b == 0 {
            done(a)
        } else {
            suspend(move || gcd_iter(b, a % b))
        }
    }
    gcd_iter(a, b).evaluate()
}

/// `[start, end)` 구간의 정수를 영속 리스트로 만든다
/// (The integers in `[start, end)` as a persistent list).
///
/// 뒤에서 앞으로 쌓으므로 각 단계는 `cons` 한 번이다
/// (Built back to front so every step is a single `cons`).
///
/// # 예시 (Examples)
/// ```
/// use fp_common::list;
/// use fp_tailrec::recursion::range;
/// assert_eq!(range(2, 6), list![2, 3, 4, 5]);
/// assert!(range(5, 5).is_empty());
/// ```
pub fn range(start: u64, end: u64) -> List<u64> {
    fn range_iter(acc: List<u64>, start: u64, end: u64) -> Trampoline<'static, List<u64>> {
        if end <= start {
            done(acc)
        } else {
            suspend(move || range_iter(acc.cons(end - 1), start, end - 1))
        }
    }
    range_iter(List::empty(), start, end).evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_common::list;
    use rstest::rstest;

    fn factorial_recursive(n: u64) -> u128 {
        if n == 0 {
            1
        } else {
            u128::from(n) * factorial_recursive(n - 1)
        }
    }

    fn fib_tree(n: u64) -> u128 {
        if n < 2 {
            u128::from(n)
        } else {
            fib_tree(n - 1) + fib_tree(n - 2)
        }
    }

    #[test]
    fn test_factorial_variants() {
        for n in 0..20 {
            assert_eq!(factorial(n), Ok(factorial_recursive(n)));
        }
    }

    #[test]
    fn test_fibonacci_variants() {
        for n in 0..20 {
            assert_eq!(fib(n), Ok(fib_tree(n)));
        }
    }

    #[rstest]
    #[case(34, true)]
    #[case(35, false)]
    fn test_factorial_overflow_boundary(#[case] n: u64, #[case] fits: bool) {
        assert_eq!(factorial(n).is_ok(), fits);
    }

    #[test]
    fn test_fib_overflow_boundary() {
        assert_eq!(
            fib(186),
            Ok(332_825_110_087_067_562_321_196_029_789_634_457_848)
        );
        assert_eq!(
            fib(187),
            Err(TailRecError::Overflow { operation: "fib", input: 187 })
        );
    }

    #[test]
    fn test_add_is_stack_safe() {
        assert_eq!(add(3, 1_000_000), Ok(1_000_003));
        assert_eq!(add(7, 0), Ok(7));
        assert!(add(u64::MAX, 1).is_err());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(206, 40), 2);
        assert_eq!(gcd(17, 0), 17);
        assert_eq!(gcd(0, 9), 9);
    }

    #[test]
    fn test_range() {
        assert_eq!(range(0, 4), list![0, 1, 2, 3]);
        assert_eq!(range(3, 1), List::empty());
        assert_eq!(range(0, 1_000_000).len(), 1_000_000);
    }
}
