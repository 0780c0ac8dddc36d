// Helper macro to distinguish between patterns and expressions
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };
}

// Generates one test function per field. Each test binds a fresh copy of the
// case's backing array, so cases never observe each other's writes.
macro_rules! handle_case {
    ([$($attrs:meta)*] size, $expected:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_size() {
            let backing = backing!();
            let view = FixedView::new(&backing);
            pretty_assertions::assert_eq!(view.size(), $expected);
            pretty_assertions::assert_eq!(view.max_size(), $expected);
            pretty_assertions::assert_eq!(view.len(), $expected);
            assert!(!view.is_empty());
        }
    };

    ([$($attrs:meta)*] checked, [$(($pos:expr, $expected:tt)),* $(,)?]) => {
        $(#[$attrs])*
        #[test]
        fn validate_checked() {
            let backing = backing!();
            let view = FixedView::new(&backing);
            $(
                assert_case!(view.at($pos), $expected);
            )*
            pretty_assertions::assert_eq!(view, backing!());
        }
    };

    ([$($attrs:meta)*] reversed, $expected:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_reversed() {
            let backing = backing!();
            let view = FixedView::new(&backing);
            let actual: Vec<_> = view.rev_iter().cloned().collect();
            pretty_assertions::assert_eq!(actual, Vec::from($expected));
        }
    };

    ([$($attrs:meta)*] filled, ($value:expr, $expected:expr)) => {
        $(#[$attrs])*
        #[test]
        fn validate_filled() {
            let mut backing = backing!();
            FixedViewMut::new(&mut backing).fill($value);
            pretty_assertions::assert_eq!(backing, $expected);
        }
    };

    ([$($attrs:meta)*] less_than, $other:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_less_than() {
            let backing = backing!();
            let other = $other;
            let lhs = FixedView::new(&backing);
            let rhs = FixedView::new(&other);
            assert!(lhs < rhs, "{:?} should order before {:?}", lhs, rhs);
            assert!(rhs > lhs);
            assert!(lhs <= rhs);
            assert!(lhs != rhs);
        }
    };

    ([$($attrs:meta)*] swapped_with, $other:expr) => {
        $(#[$attrs])*
        #[test]
        fn validate_swapped_with() {
            let mut backing = backing!();
            let mut other = $other;
            let (before_backing, before_other) = (backing.clone(), other.clone());
            {
                let mut lhs = FixedViewMut::new(&mut backing);
                let mut rhs = FixedViewMut::new(&mut other);
                lhs.swap_contents(&mut rhs);
            }
            pretty_assertions::assert_eq!(backing, before_other);
            pretty_assertions::assert_eq!(other, before_backing);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, backing second, then any order for assertions
macro_rules! test_case {
    (
        name: $name:ident,
        backing: $backing:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // A fresh copy of the backing storage for every test function
            macro_rules! backing {
                () => {
                    $backing
                };
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
