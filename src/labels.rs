//! Fixed page text

pub const SAVE: &str = "保存";
pub const SAVED: &str = "保存完了";
pub const SAVE_FAILED: &str = "保存失敗";

pub const PROJECTION_PREFIX: &str = "１年間で ";
pub const PROJECTION_PLACEHOLDER: &str = "数値を入力すると計算されます";
pub const PROJECTION_LEAD: &str = "積分結果予測： ";
pub const PROJECTION_TAIL: &str = " の積み上げ";

pub const LOAD_MALFORMED: &str =
    "保存データを読み込めませんでした。空のワークブックから始めます。";
pub const LOAD_UNAVAILABLE: &str =
    "ブラウザのストレージを利用できません。保存はできない可能性があります。";
