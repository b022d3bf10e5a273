use nulltype::{
    ArgumentValue, DecodeError, NullBool, NullByte, NullFloat32, NullFloat64, NullInt, NullInt8,
    NullInt16, NullInt32, NullInt64, NullString, NullTime, SourceType, Value,
};
use nulltype_test::test_scan_rejects;
use time::macros::datetime;

#[test]
fn it_scans_int64_from_text_and_encodes_json() -> anyhow::Result<()> {
    let mut n = NullInt64::null();
    n.scan(&Value::from("42"))?;
    assert!(n.is_valid());
    assert_eq!(*n.get(), 42);
    assert_eq!(n.to_json()?, b"42");
    assert_eq!(n.value(), Some(ArgumentValue::Int64(42)));

    n.scan(&Value::Null)?;
    assert!(n.is_null());
    assert_eq!(*n.get(), 0);
    assert_eq!(n.to_json()?, b"null");
    assert_eq!(n.value(), None);

    Ok(())
}

#[test]
fn it_scans_integers_from_text_and_bytes() -> anyhow::Result<()> {
    let mut n8 = NullInt8::null();
    n8.scan(&Value::from("-12"))?;
    assert_eq!(n8, NullInt8::some(-12));

    let mut n16 = NullInt16::null();
    n16.scan(&Value::from(&b"32767"[..]))?;
    assert_eq!(n16, NullInt16::some(i16::MAX));

    let mut n32 = NullInt32::null();
    n32.scan(&Value::from("-2147483648"))?;
    assert_eq!(n32, NullInt32::some(i32::MIN));

    let mut n = NullInt::null();
    n.scan(&Value::from(&b"+77"[..]))?;
    assert_eq!(n, NullInt::some(77));

    Ok(())
}

#[test]
fn it_widens_smaller_integers() -> anyhow::Result<()> {
    let mut n64 = NullInt64::null();
    for v in [
        Value::Int8(-1),
        Value::Int16(-1),
        Value::Int32(-1),
        Value::Int64(-1),
        Value::Int(-1),
    ] {
        n64.scan(&v)?;
        assert_eq!(n64, NullInt64::some(-1), "{v:?}");
    }

    let mut n32 = NullInt32::null();
    for v in [Value::Int8(7), Value::Int16(7), Value::Int32(7), Value::Int(7)] {
        n32.scan(&v)?;
        assert_eq!(n32, NullInt32::some(7), "{v:?}");
    }

    let mut n = NullInt::null();
    for v in [Value::Int8(9), Value::Int16(9), Value::Int32(9), Value::Int64(9)] {
        n.scan(&v)?;
        assert_eq!(n, NullInt::some(9), "{v:?}");
    }

    Ok(())
}

#[test]
fn it_scans_floats() -> anyhow::Result<()> {
    let mut f32v = NullFloat32::null();
    f32v.scan(&Value::from("0.25"))?;
    assert_eq!(f32v, NullFloat32::some(0.25));
    f32v.scan(&Value::Int64(3))?;
    assert_eq!(f32v, NullFloat32::some(3.0));
    f32v.scan(&Value::Float32(1.5))?;
    assert_eq!(f32v.value(), Some(ArgumentValue::Float32(1.5)));

    let mut f64v = NullFloat64::null();
    f64v.scan(&Value::from(&b"-0.125"[..]))?;
    assert_eq!(f64v, NullFloat64::some(-0.125));
    f64v.scan(&Value::Int(-4))?;
    assert_eq!(f64v, NullFloat64::some(-4.0));
    f64v.scan(&Value::Float64(2.5))?;
    assert_eq!(f64v.value(), Some(ArgumentValue::Float64(2.5)));

    Ok(())
}

#[test]
fn it_scans_bools() -> anyhow::Result<()> {
    let mut b = NullBool::null();
    b.scan(&Value::Int64(0))?;
    assert_eq!(b, NullBool::some(false));
    assert!(b.is_zero_or_null());

    b.scan(&Value::Int64(1))?;
    assert_eq!(b, NullBool::some(true));
    assert_eq!(b.value(), Some(ArgumentValue::Bool(true)));

    b.scan(&Value::from("F"))?;
    assert_eq!(b, NullBool::some(false));

    b.scan(&Value::Bool(true))?;
    assert_eq!(b.to_string(), "true");

    let err = b.scan(&Value::Int64(2)).unwrap_err();
    assert!(matches!(err, DecodeError::Range { kind: "Bool", value: 2 }));
    assert_eq!(b, NullBool::some(true));

    Ok(())
}

#[test]
fn it_scans_bytes() -> anyhow::Result<()> {
    let mut b = NullByte::null();
    b.scan(&Value::Uint8(97))?;
    assert_eq!(b.to_string(), "a");
    assert_eq!(b.value(), Some(ArgumentValue::Uint8(97)));
    assert_eq!(b.to_json()?, b"97");

    Ok(())
}

#[test]
fn it_scans_strings() -> anyhow::Result<()> {
    let mut s = NullString::null();
    s.scan(&Value::from(&b"from bytes"[..]))?;
    assert_eq!(s.get(), "from bytes");
    assert_eq!(s.value(), Some(ArgumentValue::Text("from bytes".into())));

    s.scan(&Value::Bytes(vec![b'o', b'k', 0xc3]))?;
    assert_eq!(s.get(), "ok\u{fffd}");

    Ok(())
}

#[test]
fn it_scans_times() -> anyhow::Result<()> {
    let at = datetime!(2024-02-29 12:00:00 -07:00);
    let mut t = NullTime::null();
    t.scan(&Value::from(at))?;
    assert_eq!(*t.get(), at);
    assert_eq!(t.value(), Some(ArgumentValue::Time(at)));
    assert_eq!(t.to_json()?, b"\"2024-02-29T12:00:00-07:00\"");

    Ok(())
}

#[test]
fn it_rejects_float_text_past_the_kind_range() {
    let mut f = NullFloat64::some(1.0);
    let err = f.scan(&Value::from("1e400")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse \"1e400\" as Float64: value out of range"
    );
    assert_eq!(f, NullFloat64::some(1.0));

    let mut f = NullFloat32::null();
    assert!(f.scan(&Value::from("1e39")).is_err());
    assert!(f.is_null());
}

#[test]
fn it_scans_its_own_parameters_back() -> anyhow::Result<()> {
    let n8 = NullInt8::some(i8::MIN);
    let mut back = NullInt8::null();
    back.scan(&Value::from(n8.value()))?;
    assert_eq!(back, n8);

    let b = NullByte::some(b'z');
    let mut back = NullByte::null();
    back.scan(&Value::from(b.value()))?;
    assert_eq!(back, b);

    let t = NullTime::some(datetime!(2000-01-01 0:00 UTC));
    let mut back = NullTime::null();
    back.scan(&Value::from(t.value()))?;
    assert_eq!(back, t);

    back.scan(&Value::from(NullTime::null().value()))?;
    assert!(back.is_null());
    Ok(())
}

#[test]
fn it_leaves_state_unchanged_on_failure() {
    let mut n = NullInt16::some(5);
    assert!(n.scan(&Value::Int(40_000)).is_err());
    assert_eq!(n, NullInt16::some(5));

    let mut n = NullInt16::null();
    assert!(n.scan(&Value::from("five")).is_err());
    assert!(n.is_null());
}

#[test]
fn it_reports_errors() {
    let mut n = NullInt16::null();
    let err = n.scan(&Value::Int(32768)).unwrap_err();
    assert_eq!(err.to_string(), "value out of range for Int16: 32768");

    let mut n = NullInt64::null();
    let err = n.scan(&Value::Float64(1.0)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type: f64");

    let err = n.scan(&Value::from("4x")).unwrap_err();
    assert!(
        err.to_string().starts_with("cannot parse \"4x\" as Int64"),
        "{err}"
    );
}

test_scan_rejects!(int8<i8>(
    128_isize => DecodeError::Range { kind: "Int8", value: 128 },
    -129_isize => DecodeError::Range { kind: "Int8", value: -129 },
    "128" => DecodeError::Parse { .. },
    1_i16 => DecodeError::UnsupportedSourceType(SourceType::Int16),
    1_u8 => DecodeError::UnsupportedSourceType(SourceType::Uint8),
));

test_scan_rejects!(int16<i16>(
    32768_isize => DecodeError::Range { kind: "Int16", value: 32768 },
    -32769_isize => DecodeError::Range { kind: "Int16", value: -32769 },
    "" => DecodeError::Parse { .. },
    1_i32 => DecodeError::UnsupportedSourceType(SourceType::Int32),
    1.0_f32 => DecodeError::UnsupportedSourceType(SourceType::Float32),
));

test_scan_rejects!(int32<i32>(
    "1.5" => DecodeError::Parse { .. },
    1_i64 => DecodeError::UnsupportedSourceType(SourceType::Int64),
    true => DecodeError::UnsupportedSourceType(SourceType::Bool),
));

test_scan_rejects!(int64<i64>(
    "9223372036854775808" => DecodeError::Parse { .. },
    " 1" => DecodeError::Parse { .. },
    1_u64 => DecodeError::UnsupportedSourceType(SourceType::Uint64),
    1.0_f64 => DecodeError::UnsupportedSourceType(SourceType::Float64),
));

test_scan_rejects!(int<isize>(
    "abc" => DecodeError::Parse { .. },
    2_u32 => DecodeError::UnsupportedSourceType(SourceType::Uint32),
));

test_scan_rejects!(bool<bool>(
    2_i64 => DecodeError::Range { kind: "Bool", value: 2 },
    -1_isize => DecodeError::Range { kind: "Bool", value: -1 },
    "yes" => DecodeError::Parse { .. },
    0.0_f64 => DecodeError::UnsupportedSourceType(SourceType::Float64),
));

test_scan_rejects!(byte<u8>(
    97_isize => DecodeError::UnsupportedSourceType(SourceType::Int),
    "a" => DecodeError::UnsupportedSourceType(SourceType::Text),
));

test_scan_rejects!(float32<f32>(
    "pi" => DecodeError::Parse { kind: "Float32", .. },
    "1e39" => DecodeError::Parse { kind: "Float32", .. },
    "-3.5e38" => DecodeError::Parse { kind: "Float32", .. },
    1.0_f64 => DecodeError::UnsupportedSourceType(SourceType::Float64),
    1_u16 => DecodeError::UnsupportedSourceType(SourceType::Uint16),
));

test_scan_rejects!(float64<f64>(
    "" => DecodeError::Parse { kind: "Float64", .. },
    "1e400" => DecodeError::Parse { kind: "Float64", .. },
    &b"-1e309"[..] => DecodeError::Parse { kind: "Float64", .. },
    1.0_f32 => DecodeError::UnsupportedSourceType(SourceType::Float32),
));

test_scan_rejects!(string<String>(
    1_i64 => DecodeError::UnsupportedSourceType(SourceType::Int64),
    false => DecodeError::UnsupportedSourceType(SourceType::Bool),
));

test_scan_rejects!(time<time::OffsetDateTime>(
    "2022-12-31T23:59:59Z" => DecodeError::UnsupportedSourceType(SourceType::Text),
    1672531199_i64 => DecodeError::UnsupportedSourceType(SourceType::Int64),
));
