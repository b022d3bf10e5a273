#[doc(hidden)]
pub use anyhow;
#[doc(hidden)]
pub use nulltype;
#[doc(hidden)]
pub use paste;

// Test a kind through both boundaries
#[macro_export]
macro_rules! test_type {
    ($name:ident<$ty:ty>($($json:literal == $value:expr),+ $(,)?)) => {
        $crate::test_json_type!($name<$ty>($($json == $value),+));
        $crate::test_scan_type!($name<$ty>($($value),+));
    };

    ($name:ident($($json:literal == $value:expr),+ $(,)?)) => {
        $crate::test_type!($name<$name>($($json == $value),+));
    };
}

// Test that each value encodes to exactly the given JSON text and decodes back to itself
#[macro_export]
macro_rules! test_json_type {
    ($name:ident<$ty:ty>($($json:literal == $value:expr),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_json_type_ $name >] () -> $crate::anyhow::Result<()> {
                use $crate::nulltype::Null;

                $(
                    let expected: Null<$ty> = Null::some($value);
                    let encoded = String::from_utf8(expected.to_json()?)?;
                    assert_eq!(encoded, $json, "encoding {:?}", expected);

                    let mut decoded = Null::<$ty>::null();
                    decoded.from_json($json.as_bytes())?;
                    assert_eq!(decoded, expected, "decoding {}", $json);
                )+

                let null = Null::<$ty>::null();
                assert_eq!(null.to_json()?, b"null");

                let mut decoded: Null<$ty> = Null::some($crate::first!($($value),+));
                decoded.from_json(b"null")?;
                assert_eq!(decoded, Null::null());

                Ok(())
            }
        }
    };
}

// Test that each value scans from its own typed database value, and that the parameter it
// encodes to scans back to the same value
#[macro_export]
macro_rules! test_scan_type {
    ($name:ident<$ty:ty>($($value:expr),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_scan_type_ $name >] () -> $crate::anyhow::Result<()> {
                use $crate::nulltype::{Encode, Null, Value};

                $(
                    let expected: Null<$ty> = Null::some($value);
                    let mut scanned = Null::<$ty>::null();
                    scanned.scan(&Value::from($value))?;
                    assert_eq!(scanned, expected);
                    assert!(!scanned.is_null());
                    assert_eq!(scanned.value(), Some(expected.get().encode()));

                    let param = expected.value();
                    let mut again = Null::<$ty>::null();
                    again.scan(&Value::from(param.clone()))?;
                    assert_eq!(again, expected, "parameter {:?}", param);
                )+

                let mut scanned: Null<$ty> = Null::some($crate::first!($($value),+));
                scanned.scan(&Value::from(Null::<$ty>::null().value()))?;
                assert_eq!(scanned, Null::null());
                assert!(scanned.is_null());
                assert_eq!(scanned.value(), None);

                Ok(())
            }
        }
    };
}

// Test that each database value is rejected by the kind with the given error variant
#[macro_export]
macro_rules! test_scan_rejects {
    ($name:ident<$ty:ty>($($value:expr => $err:pat),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_scan_rejects_ $name >] () {
                use $crate::nulltype::{DecodeError, Null, Value};

                $(
                    let mut scanned = Null::<$ty>::null();
                    let value = Value::from($value);
                    match scanned.scan(&value) {
                        Err($err) => {}
                        other => panic!("scanning {value:?}: unexpected result {other:?}"),
                    }
                )+
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! first {
    ($head:expr $(, $tail:expr)*) => {
        $head
    };
}
