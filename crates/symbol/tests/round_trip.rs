use datamatrix::DataMatrix;
use rackmark_symbol::{encode, latin1_string};

fn decode(code: &str) -> String {
    let symbol = encode(code).unwrap();
    let bytes = DataMatrix::decode(symbol.modules(), symbol.width())
        .unwrap_or_else(|e| panic!("decoding '{code}' failed: {e:?}"));
    latin1_string(&bytes)
}

#[test]
fn test_decoded_symbol_reproduces_location_code() {
    for code in [
        "A01-01-1",
        "A01-02-2",
        "A01-03-0",
        "b12.x/07",
        "Z",
        "PASILLO 4 · ESTANTE Ñ",
        "0000000000000000",
    ] {
        assert_eq!(decode(code), code);
    }
}

#[test]
fn test_case_and_punctuation_survive() {
    assert_eq!(decode("aB-(c)_D;e"), "aB-(c)_D;e");
}
