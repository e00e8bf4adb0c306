use {
    proptest::prelude::*,
    quickcheck_macros::quickcheck,
    std::collections::HashSet,
    text_huffman::{encode, packing, table},
};

#[quickcheck]
fn roundtrip(text: String) -> bool {
    let encoded = encode(&text).unwrap();
    let bit_len = Some(encoded.packed.bit_len);
    text == packing::unpack(&encoded.table, &encoded.packed.bytes, bit_len).unwrap()
}

#[quickcheck]
fn roundtrip_through_table_file(text: String) -> bool {
    let encoded = encode(&text).unwrap();
    let file = table::read(&table::write(&encoded.table, Some(encoded.packed.bit_len))).unwrap();
    file.table == encoded.table
        && text == packing::unpack(&file.table, &encoded.packed.bytes, file.bit_len).unwrap()
}

proptest! {
    #[test]
    fn deterministic(text in "\\PC*") {
        prop_assert_eq!(encode(&text).unwrap(), encode(&text).unwrap());
    }

    #[test]
    fn one_entry_per_distinct_character(text in "[a-e \n]{0,64}") {
        let encoded = encode(&text).unwrap();
        let distinct: HashSet<char> = text.chars().collect();
        let keys: HashSet<char> = encoded.table.iter().map(|(symbol, _)| symbol).collect();
        prop_assert_eq!(encoded.table.len(), distinct.len());
        prop_assert_eq!(keys, distinct);
    }

    #[test]
    fn payload_is_ceil_of_code_bits(text in "[a-z\n]{0,200}") {
        let encoded = encode(&text).unwrap();
        let bits: usize = text
            .chars()
            .map(|c| encoded.table.get(c).unwrap().len())
            .sum();
        prop_assert_eq!(encoded.packed.bit_len, bits);
        prop_assert_eq!(encoded.packed.bytes.len(), (bits + 7) / 8);
    }

    #[test]
    fn codes_are_prefix_free(text in "[a-z0-9 \n]{1,100}") {
        let encoded = encode(&text).unwrap();
        let codes: Vec<String> = encoded.table.iter().map(|(_, code)| code.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                prop_assert!(i == j || !b.starts_with(a.as_str()));
            }
        }
    }
}
