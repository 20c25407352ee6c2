use rawaudio::{Error, RawAudioFormat, SampleFormat, SampleValue};

fn formats() -> impl Iterator<Item = RawAudioFormat> {
    SampleFormat::ALL
        .into_iter()
        .map(|sf| RawAudioFormat::new(2, 48000, sf).unwrap())
}

/// Values spread over the whole range of the format, endpoints included.
fn probe_values(format: &RawAudioFormat) -> Vec<SampleValue> {
    if format.is_float() {
        return [-1.0, -0.5, -0.25, 0.0, 0.125, 0.5, 1.0]
            .into_iter()
            .map(SampleValue::Float)
            .collect();
    }
    let (min, max) = (format.sample_min().as_i64(), format.sample_max().as_i64());
    let mid = min + (max - min) / 2;
    [min, min + 1, mid - 1, mid, mid + 1, 0, 1, max - 1, max]
        .into_iter()
        .filter(|v| (min..=max).contains(v))
        .map(SampleValue::Int)
        .collect()
}

#[test]
fn test_encode_decode_round_trip() {
    for format in formats() {
        for v in probe_values(&format) {
            let bytes = format.encode(v);
            assert_eq!(format.decode(&bytes), v, "{format} value {v}");
        }
    }
}

#[test]
fn test_encoded_length_is_sample_size() {
    for format in formats() {
        for v in probe_values(&format) {
            assert_eq!(format.encode(v).len(), format.sample_size(), "{format}");
        }
        assert_eq!(format.frame_size(), format.sample_size() * 2);
    }
}

#[test]
fn test_silence_is_zero() {
    for format in formats() {
        let silence = format.silence_sample();
        assert_eq!(silence.len(), format.sample_size());
        assert!(format.decode(&silence).is_zero(), "{format}");
    }
}

#[test]
fn test_overflow_boundaries() {
    for format in formats() {
        let (min, max) = (format.sample_min(), format.sample_max());
        assert!(format.encode_checked(max).is_ok(), "{format}");
        assert!(format.encode_checked(min).is_ok(), "{format}");

        let (above, below) = if format.is_float() {
            (SampleValue::Float(max.as_f64() + 1.0), SampleValue::Float(min.as_f64() - 1.0))
        } else {
            (SampleValue::Int(max.as_i64() + 1), SampleValue::Int(min.as_i64() - 1))
        };
        assert!(
            matches!(format.encode_checked(above), Err(Error::Overflow { .. })),
            "{format}"
        );
        assert!(
            matches!(format.encode_checked(below), Err(Error::Overflow { .. })),
            "{format}"
        );
    }
}

#[test]
fn test_checked_matches_unchecked_in_range() {
    for format in formats() {
        for v in probe_values(&format) {
            assert_eq!(format.encode_checked(v).unwrap(), format.encode(v), "{format}");
        }
    }
}

#[test]
fn test_byte_order_mirrors() {
    let pairs = [
        (SampleFormat::S16Le, SampleFormat::S16Be),
        (SampleFormat::U24Le, SampleFormat::U24Be),
        (SampleFormat::S32Le, SampleFormat::S32Be),
        (SampleFormat::F32Le, SampleFormat::F32Be),
        (SampleFormat::F64Le, SampleFormat::F64Be),
    ];
    for (le, be) in pairs {
        let le = RawAudioFormat::new(1, 8000, le).unwrap();
        let be = RawAudioFormat::new(1, 8000, be).unwrap();
        for v in probe_values(&le) {
            let mut bytes = le.encode(v);
            bytes.reverse();
            assert_eq!(bytes, be.encode(v), "{le} vs {be}");
        }
    }
}
