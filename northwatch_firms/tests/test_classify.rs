#![allow(unused)]

use northwatch_firms::HotspotConfidence;

#[test]
fn test_categorical_tokens () {
    assert_eq!( HotspotConfidence::classify("LOW"), HotspotConfidence::Low);
    assert_eq!( HotspotConfidence::classify(" High "), HotspotConfidence::High);
    assert_eq!( HotspotConfidence::classify("nominal"), HotspotConfidence::Nominal);
}

#[test]
fn test_numeric_thresholds () {
    assert_eq!( HotspotConfidence::classify("55"), HotspotConfidence::Nominal);
    assert_eq!( HotspotConfidence::classify("79.9"), HotspotConfidence::Nominal);
    assert_eq!( HotspotConfidence::classify("80"), HotspotConfidence::High);
    assert_eq!( HotspotConfidence::classify("39.999"), HotspotConfidence::Low);
    assert_eq!( HotspotConfidence::classify("100"), HotspotConfidence::High);
    assert_eq!( HotspotConfidence::classify("0"), HotspotConfidence::Low);
}

#[test]
fn test_unclassifiable_input () {
    assert_eq!( HotspotConfidence::classify("abc"), HotspotConfidence::Unknown);
    assert_eq!( HotspotConfidence::classify(""), HotspotConfidence::Unknown);
    assert_eq!( HotspotConfidence::classify("   "), HotspotConfidence::Unknown);
    assert_eq!( HotspotConfidence::classify("NaN"), HotspotConfidence::Unknown);

    // single letter VIIRS NRT encodings are deliberately not recognized
    assert_eq!( HotspotConfidence::classify("n"), HotspotConfidence::Unknown);
    assert_eq!( HotspotConfidence::classify("h"), HotspotConfidence::Unknown);
}
