use std::fs;

use tempfile::TempDir;
use zipcode_reader::{load_ken_all, parse_ken_all, ZipcodeError};

// Trimmed rows in the raw KEN_ALL column layout.
const KEN_ALL_SAMPLE: &str = concat!(
    "01101,\"060  \",\"0600000\",\"ﾎｯｶｲﾄﾞｳ\",\"ｻｯﾎﾟﾛｼﾁｭｳｵｳｸ\",\"ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ\",\"北海道\",\"札幌市中央区\",\"以下に掲載がない場合\",0,0,0,0,0,0\n",
    "13101,\"100  \",\"1000001\",\"ﾄｳｷｮｳﾄ\",\"ﾁﾖﾀﾞｸ\",\"ﾁﾖﾀﾞ\",\"東京都\",\"千代田区\",\"千代田\",0,0,1,0,0,0\n",
    "24303,\"498  \",\"4980000\",\"ﾐｴｹﾝ\",\"ｸﾜﾅｸﾞﾝｷｿｻｷﾁｮｳ\",\"ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ\",\"三重県\",\"桑名郡木曽岬町\",\"以下に掲載がない場合\",0,0,0,0,0,0\n",
    "23235,\"498  \",\"4980000\",\"ｱｲﾁｹﾝ\",\"ﾔﾄﾐｼ\",\"ｲｶﾆｹｲｻｲｶﾞﾅｲﾊﾞｱｲ\",\"愛知県\",\"弥富市\",\"以下に掲載がない場合\",0,0,0,0,0,0\n",
);

#[test]
fn parse_ken_all_builds_the_flat_map() {
    let map = parse_ken_all(KEN_ALL_SAMPLE).unwrap();
    assert_eq!(map.len(), 3);

    let sapporo = &map["0600000"];
    assert_eq!(sapporo.len(), 1);
    assert_eq!(sapporo[0].prefecture, "北海道");
    assert_eq!(sapporo[0].city, "札幌市中央区");
    // The "no sub-area" sentinel becomes an absent town.
    assert_eq!(sapporo[0].town, None);

    let chiyoda = &map["1000001"];
    assert_eq!(chiyoda[0].town.as_deref(), Some("千代田"));
}

#[test]
fn parse_ken_all_preserves_row_order_per_code() {
    let map = parse_ken_all(KEN_ALL_SAMPLE).unwrap();

    let shared = &map["4980000"];
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].prefecture, "三重県");
    assert_eq!(shared[1].prefecture, "愛知県");
}

#[test]
fn parse_ken_all_skips_blank_codes_and_empty_lines() {
    let text = concat!(
        "\n",
        "01101,\"060  \",\"\",\"x\",\"x\",\"x\",\"北海道\",\"札幌市中央区\",\"町\",0,0,0,0,0,0\n",
        "13101,\"100  \",\"1000001\",\"x\",\"x\",\"x\",\"東京都\",\"千代田区\",\"千代田\",0,0,1,0,0,0\n",
    );
    let map = parse_ken_all(text).unwrap();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("1000001"));
}

#[test]
fn parse_ken_all_rejects_short_rows() {
    let result = parse_ken_all("01101,\"060  \",\"0600000\"\n");
    assert!(matches!(
        result,
        Err(ZipcodeError::DatasetRow { line: 1, .. })
    ));
}

#[test]
fn load_ken_all_decodes_shift_jis() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ken_all.csv");
    let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(KEN_ALL_SAMPLE);
    fs::write(&path, &encoded).unwrap();

    let map = load_ken_all(&path).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["0600000"][0].prefecture, "北海道");
}
