// zhuyin-tables/src/symbols.rs
//
// Symbol catalogs: the static enumerations and maps the whole table build is
// computed from. Nothing here is runtime-configurable; the catalogs are the
// fixed inputs of a deterministic build.
//
// Layout of the data:
// - `HANYU_PINYIN_BOPOMOFO_MAP` is the primary catalog. Its keys are the full
//   pinyin syllables plus the shengmu that have a bopomofo glyph of their own
//   (`b`..`s`, `zh`, `ch`, `sh`). `w` and `y` have no initial glyph and are
//   deliberately absent; they enter the pipeline through the shengmu path.
// - The luoma and secondary-bopomofo romanizations are keyed by bopomofo form
//   and derived once from per-glyph correspondence tables over the catalog.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::TableError;

/// Pinyin spelling -> bopomofo glyph string.
pub static HANYU_PINYIN_BOPOMOFO_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        let mut m = HashMap::new();
        m.insert("a", "ㄚ");
        m.insert("ai", "ㄞ");
        m.insert("an", "ㄢ");
        m.insert("ang", "ㄤ");
        m.insert("ao", "ㄠ");
        m.insert("b", "ㄅ");
        m.insert("ba", "ㄅㄚ");
        m.insert("bai", "ㄅㄞ");
        m.insert("ban", "ㄅㄢ");
        m.insert("bang", "ㄅㄤ");
        m.insert("bao", "ㄅㄠ");
        m.insert("bei", "ㄅㄟ");
        m.insert("ben", "ㄅㄣ");
        m.insert("beng", "ㄅㄥ");
        m.insert("bi", "ㄅㄧ");
        m.insert("bian", "ㄅㄧㄢ");
        m.insert("biao", "ㄅㄧㄠ");
        m.insert("bie", "ㄅㄧㄝ");
        m.insert("bin", "ㄅㄧㄣ");
        m.insert("bing", "ㄅㄧㄥ");
        m.insert("bo", "ㄅㄛ");
        m.insert("bu", "ㄅㄨ");
        m.insert("c", "ㄘ");
        m.insert("ca", "ㄘㄚ");
        m.insert("cai", "ㄘㄞ");
        m.insert("can", "ㄘㄢ");
        m.insert("cang", "ㄘㄤ");
        m.insert("cao", "ㄘㄠ");
        m.insert("ce", "ㄘㄜ");
        m.insert("cen", "ㄘㄣ");
        m.insert("ceng", "ㄘㄥ");
        m.insert("ch", "ㄔ");
        m.insert("cha", "ㄔㄚ");
        m.insert("chai", "ㄔㄞ");
        m.insert("chan", "ㄔㄢ");
        m.insert("chang", "ㄔㄤ");
        m.insert("chao", "ㄔㄠ");
        m.insert("che", "ㄔㄜ");
        m.insert("chen", "ㄔㄣ");
        m.insert("cheng", "ㄔㄥ");
        m.insert("chi", "ㄔ");
        m.insert("chong", "ㄔㄨㄥ");
        m.insert("chou", "ㄔㄡ");
        m.insert("chu", "ㄔㄨ");
        m.insert("chua", "ㄔㄨㄚ");
        m.insert("chuai", "ㄔㄨㄞ");
        m.insert("chuan", "ㄔㄨㄢ");
        m.insert("chuang", "ㄔㄨㄤ");
        m.insert("chui", "ㄔㄨㄟ");
        m.insert("chun", "ㄔㄨㄣ");
        m.insert("chuo", "ㄔㄨㄛ");
        m.insert("ci", "ㄘ");
        m.insert("cong", "ㄘㄨㄥ");
        m.insert("cou", "ㄘㄡ");
        m.insert("cu", "ㄘㄨ");
        m.insert("cuan", "ㄘㄨㄢ");
        m.insert("cui", "ㄘㄨㄟ");
        m.insert("cun", "ㄘㄨㄣ");
        m.insert("cuo", "ㄘㄨㄛ");
        m.insert("d", "ㄉ");
        m.insert("da", "ㄉㄚ");
        m.insert("dai", "ㄉㄞ");
        m.insert("dan", "ㄉㄢ");
        m.insert("dang", "ㄉㄤ");
        m.insert("dao", "ㄉㄠ");
        m.insert("de", "ㄉㄜ");
        m.insert("dei", "ㄉㄟ");
        m.insert("den", "ㄉㄣ");
        m.insert("deng", "ㄉㄥ");
        m.insert("di", "ㄉㄧ");
        m.insert("dia", "ㄉㄧㄚ");
        m.insert("dian", "ㄉㄧㄢ");
        m.insert("diao", "ㄉㄧㄠ");
        m.insert("die", "ㄉㄧㄝ");
        m.insert("ding", "ㄉㄧㄥ");
        m.insert("diu", "ㄉㄧㄡ");
        m.insert("dong", "ㄉㄨㄥ");
        m.insert("dou", "ㄉㄡ");
        m.insert("du", "ㄉㄨ");
        m.insert("duan", "ㄉㄨㄢ");
        m.insert("dui", "ㄉㄨㄟ");
        m.insert("dun", "ㄉㄨㄣ");
        m.insert("duo", "ㄉㄨㄛ");
        m.insert("e", "ㄜ");
        m.insert("ei", "ㄟ");
        m.insert("en", "ㄣ");
        m.insert("er", "ㄦ");
        m.insert("f", "ㄈ");
        m.insert("fa", "ㄈㄚ");
        m.insert("fan", "ㄈㄢ");
        m.insert("fang", "ㄈㄤ");
        m.insert("fei", "ㄈㄟ");
        m.insert("fen", "ㄈㄣ");
        m.insert("feng", "ㄈㄥ");
        m.insert("fo", "ㄈㄛ");
        m.insert("fou", "ㄈㄡ");
        m.insert("fu", "ㄈㄨ");
        m.insert("g", "ㄍ");
        m.insert("ga", "ㄍㄚ");
        m.insert("gai", "ㄍㄞ");
        m.insert("gan", "ㄍㄢ");
        m.insert("gang", "ㄍㄤ");
        m.insert("gao", "ㄍㄠ");
        m.insert("ge", "ㄍㄜ");
        m.insert("gei", "ㄍㄟ");
        m.insert("gen", "ㄍㄣ");
        m.insert("geng", "ㄍㄥ");
        m.insert("gong", "ㄍㄨㄥ");
        m.insert("gou", "ㄍㄡ");
        m.insert("gu", "ㄍㄨ");
        m.insert("gua", "ㄍㄨㄚ");
        m.insert("guai", "ㄍㄨㄞ");
        m.insert("guan", "ㄍㄨㄢ");
        m.insert("guang", "ㄍㄨㄤ");
        m.insert("gui", "ㄍㄨㄟ");
        m.insert("gun", "ㄍㄨㄣ");
        m.insert("guo", "ㄍㄨㄛ");
        m.insert("h", "ㄏ");
        m.insert("ha", "ㄏㄚ");
        m.insert("hai", "ㄏㄞ");
        m.insert("han", "ㄏㄢ");
        m.insert("hang", "ㄏㄤ");
        m.insert("hao", "ㄏㄠ");
        m.insert("he", "ㄏㄜ");
        m.insert("hei", "ㄏㄟ");
        m.insert("hen", "ㄏㄣ");
        m.insert("heng", "ㄏㄥ");
        m.insert("hong", "ㄏㄨㄥ");
        m.insert("hou", "ㄏㄡ");
        m.insert("hu", "ㄏㄨ");
        m.insert("hua", "ㄏㄨㄚ");
        m.insert("huai", "ㄏㄨㄞ");
        m.insert("huan", "ㄏㄨㄢ");
        m.insert("huang", "ㄏㄨㄤ");
        m.insert("hui", "ㄏㄨㄟ");
        m.insert("hun", "ㄏㄨㄣ");
        m.insert("huo", "ㄏㄨㄛ");
        m.insert("j", "ㄐ");
        m.insert("ji", "ㄐㄧ");
        m.insert("jia", "ㄐㄧㄚ");
        m.insert("jian", "ㄐㄧㄢ");
        m.insert("jiang", "ㄐㄧㄤ");
        m.insert("jiao", "ㄐㄧㄠ");
        m.insert("jie", "ㄐㄧㄝ");
        m.insert("jin", "ㄐㄧㄣ");
        m.insert("jing", "ㄐㄧㄥ");
        m.insert("jiong", "ㄐㄩㄥ");
        m.insert("jiu", "ㄐㄧㄡ");
        m.insert("ju", "ㄐㄩ");
        m.insert("juan", "ㄐㄩㄢ");
        m.insert("jue", "ㄐㄩㄝ");
        m.insert("jun", "ㄐㄩㄣ");
        m.insert("k", "ㄎ");
        m.insert("ka", "ㄎㄚ");
        m.insert("kai", "ㄎㄞ");
        m.insert("kan", "ㄎㄢ");
        m.insert("kang", "ㄎㄤ");
        m.insert("kao", "ㄎㄠ");
        m.insert("ke", "ㄎㄜ");
        m.insert("kei", "ㄎㄟ");
        m.insert("ken", "ㄎㄣ");
        m.insert("keng", "ㄎㄥ");
        m.insert("kong", "ㄎㄨㄥ");
        m.insert("kou", "ㄎㄡ");
        m.insert("ku", "ㄎㄨ");
        m.insert("kua", "ㄎㄨㄚ");
        m.insert("kuai", "ㄎㄨㄞ");
        m.insert("kuan", "ㄎㄨㄢ");
        m.insert("kuang", "ㄎㄨㄤ");
        m.insert("kui", "ㄎㄨㄟ");
        m.insert("kun", "ㄎㄨㄣ");
        m.insert("kuo", "ㄎㄨㄛ");
        m.insert("l", "ㄌ");
        m.insert("la", "ㄌㄚ");
        m.insert("lai", "ㄌㄞ");
        m.insert("lan", "ㄌㄢ");
        m.insert("lang", "ㄌㄤ");
        m.insert("lao", "ㄌㄠ");
        m.insert("le", "ㄌㄜ");
        m.insert("lei", "ㄌㄟ");
        m.insert("leng", "ㄌㄥ");
        m.insert("li", "ㄌㄧ");
        m.insert("lia", "ㄌㄧㄚ");
        m.insert("lian", "ㄌㄧㄢ");
        m.insert("liang", "ㄌㄧㄤ");
        m.insert("liao", "ㄌㄧㄠ");
        m.insert("lie", "ㄌㄧㄝ");
        m.insert("lin", "ㄌㄧㄣ");
        m.insert("ling", "ㄌㄧㄥ");
        m.insert("liu", "ㄌㄧㄡ");
        m.insert("long", "ㄌㄨㄥ");
        m.insert("lou", "ㄌㄡ");
        m.insert("lu", "ㄌㄨ");
        m.insert("luan", "ㄌㄨㄢ");
        m.insert("lue", "ㄌㄩㄝ");
        m.insert("lun", "ㄌㄨㄣ");
        m.insert("luo", "ㄌㄨㄛ");
        m.insert("lv", "ㄌㄩ");
        m.insert("lve", "ㄌㄩㄝ");
        m.insert("m", "ㄇ");
        m.insert("ma", "ㄇㄚ");
        m.insert("mai", "ㄇㄞ");
        m.insert("man", "ㄇㄢ");
        m.insert("mang", "ㄇㄤ");
        m.insert("mao", "ㄇㄠ");
        m.insert("mei", "ㄇㄟ");
        m.insert("men", "ㄇㄣ");
        m.insert("meng", "ㄇㄥ");
        m.insert("mi", "ㄇㄧ");
        m.insert("mian", "ㄇㄧㄢ");
        m.insert("miao", "ㄇㄧㄠ");
        m.insert("mie", "ㄇㄧㄝ");
        m.insert("min", "ㄇㄧㄣ");
        m.insert("ming", "ㄇㄧㄥ");
        m.insert("miu", "ㄇㄧㄡ");
        m.insert("mo", "ㄇㄛ");
        m.insert("mou", "ㄇㄡ");
        m.insert("mu", "ㄇㄨ");
        m.insert("n", "ㄋ");
        m.insert("na", "ㄋㄚ");
        m.insert("nai", "ㄋㄞ");
        m.insert("nan", "ㄋㄢ");
        m.insert("nang", "ㄋㄤ");
        m.insert("nao", "ㄋㄠ");
        m.insert("ne", "ㄋㄜ");
        m.insert("nei", "ㄋㄟ");
        m.insert("nen", "ㄋㄣ");
        m.insert("neng", "ㄋㄥ");
        m.insert("ni", "ㄋㄧ");
        m.insert("nian", "ㄋㄧㄢ");
        m.insert("niang", "ㄋㄧㄤ");
        m.insert("niao", "ㄋㄧㄠ");
        m.insert("nie", "ㄋㄧㄝ");
        m.insert("nin", "ㄋㄧㄣ");
        m.insert("ning", "ㄋㄧㄥ");
        m.insert("niu", "ㄋㄧㄡ");
        m.insert("nong", "ㄋㄨㄥ");
        m.insert("nou", "ㄋㄡ");
        m.insert("nu", "ㄋㄨ");
        m.insert("nuan", "ㄋㄨㄢ");
        m.insert("nue", "ㄋㄩㄝ");
        m.insert("nuo", "ㄋㄨㄛ");
        m.insert("nv", "ㄋㄩ");
        m.insert("nve", "ㄋㄩㄝ");
        m.insert("o", "ㄛ");
        m.insert("ou", "ㄡ");
        m.insert("p", "ㄆ");
        m.insert("pa", "ㄆㄚ");
        m.insert("pai", "ㄆㄞ");
        m.insert("pan", "ㄆㄢ");
        m.insert("pang", "ㄆㄤ");
        m.insert("pao", "ㄆㄠ");
        m.insert("pei", "ㄆㄟ");
        m.insert("pen", "ㄆㄣ");
        m.insert("peng", "ㄆㄥ");
        m.insert("pi", "ㄆㄧ");
        m.insert("pian", "ㄆㄧㄢ");
        m.insert("piao", "ㄆㄧㄠ");
        m.insert("pie", "ㄆㄧㄝ");
        m.insert("pin", "ㄆㄧㄣ");
        m.insert("ping", "ㄆㄧㄥ");
        m.insert("po", "ㄆㄛ");
        m.insert("pou", "ㄆㄡ");
        m.insert("pu", "ㄆㄨ");
        m.insert("q", "ㄑ");
        m.insert("qi", "ㄑㄧ");
        m.insert("qia", "ㄑㄧㄚ");
        m.insert("qian", "ㄑㄧㄢ");
        m.insert("qiang", "ㄑㄧㄤ");
        m.insert("qiao", "ㄑㄧㄠ");
        m.insert("qie", "ㄑㄧㄝ");
        m.insert("qin", "ㄑㄧㄣ");
        m.insert("qing", "ㄑㄧㄥ");
        m.insert("qiong", "ㄑㄩㄥ");
        m.insert("qiu", "ㄑㄧㄡ");
        m.insert("qu", "ㄑㄩ");
        m.insert("quan", "ㄑㄩㄢ");
        m.insert("que", "ㄑㄩㄝ");
        m.insert("qun", "ㄑㄩㄣ");
        m.insert("r", "ㄖ");
        m.insert("ran", "ㄖㄢ");
        m.insert("rang", "ㄖㄤ");
        m.insert("rao", "ㄖㄠ");
        m.insert("re", "ㄖㄜ");
        m.insert("ren", "ㄖㄣ");
        m.insert("reng", "ㄖㄥ");
        m.insert("ri", "ㄖ");
        m.insert("rong", "ㄖㄨㄥ");
        m.insert("rou", "ㄖㄡ");
        m.insert("ru", "ㄖㄨ");
        m.insert("rua", "ㄖㄨㄚ");
        m.insert("ruan", "ㄖㄨㄢ");
        m.insert("rui", "ㄖㄨㄟ");
        m.insert("run", "ㄖㄨㄣ");
        m.insert("ruo", "ㄖㄨㄛ");
        m.insert("s", "ㄙ");
        m.insert("sa", "ㄙㄚ");
        m.insert("sai", "ㄙㄞ");
        m.insert("san", "ㄙㄢ");
        m.insert("sang", "ㄙㄤ");
        m.insert("sao", "ㄙㄠ");
        m.insert("se", "ㄙㄜ");
        m.insert("sen", "ㄙㄣ");
        m.insert("seng", "ㄙㄥ");
        m.insert("sh", "ㄕ");
        m.insert("sha", "ㄕㄚ");
        m.insert("shai", "ㄕㄞ");
        m.insert("shan", "ㄕㄢ");
        m.insert("shang", "ㄕㄤ");
        m.insert("shao", "ㄕㄠ");
        m.insert("she", "ㄕㄜ");
        m.insert("shei", "ㄕㄟ");
        m.insert("shen", "ㄕㄣ");
        m.insert("sheng", "ㄕㄥ");
        m.insert("shi", "ㄕ");
        m.insert("shou", "ㄕㄡ");
        m.insert("shu", "ㄕㄨ");
        m.insert("shua", "ㄕㄨㄚ");
        m.insert("shuai", "ㄕㄨㄞ");
        m.insert("shuan", "ㄕㄨㄢ");
        m.insert("shuang", "ㄕㄨㄤ");
        m.insert("shui", "ㄕㄨㄟ");
        m.insert("shun", "ㄕㄨㄣ");
        m.insert("shuo", "ㄕㄨㄛ");
        m.insert("si", "ㄙ");
        m.insert("song", "ㄙㄨㄥ");
        m.insert("sou", "ㄙㄡ");
        m.insert("su", "ㄙㄨ");
        m.insert("suan", "ㄙㄨㄢ");
        m.insert("sui", "ㄙㄨㄟ");
        m.insert("sun", "ㄙㄨㄣ");
        m.insert("suo", "ㄙㄨㄛ");
        m.insert("t", "ㄊ");
        m.insert("ta", "ㄊㄚ");
        m.insert("tai", "ㄊㄞ");
        m.insert("tan", "ㄊㄢ");
        m.insert("tang", "ㄊㄤ");
        m.insert("tao", "ㄊㄠ");
        m.insert("te", "ㄊㄜ");
        m.insert("tei", "ㄊㄟ");
        m.insert("teng", "ㄊㄥ");
        m.insert("ti", "ㄊㄧ");
        m.insert("tian", "ㄊㄧㄢ");
        m.insert("tiao", "ㄊㄧㄠ");
        m.insert("tie", "ㄊㄧㄝ");
        m.insert("ting", "ㄊㄧㄥ");
        m.insert("tong", "ㄊㄨㄥ");
        m.insert("tou", "ㄊㄡ");
        m.insert("tu", "ㄊㄨ");
        m.insert("tuan", "ㄊㄨㄢ");
        m.insert("tui", "ㄊㄨㄟ");
        m.insert("tun", "ㄊㄨㄣ");
        m.insert("tuo", "ㄊㄨㄛ");
        m.insert("wa", "ㄨㄚ");
        m.insert("wai", "ㄨㄞ");
        m.insert("wan", "ㄨㄢ");
        m.insert("wang", "ㄨㄤ");
        m.insert("wei", "ㄨㄟ");
        m.insert("wen", "ㄨㄣ");
        m.insert("weng", "ㄨㄥ");
        m.insert("wo", "ㄨㄛ");
        m.insert("wu", "ㄨ");
        m.insert("x", "ㄒ");
        m.insert("xi", "ㄒㄧ");
        m.insert("xia", "ㄒㄧㄚ");
        m.insert("xian", "ㄒㄧㄢ");
        m.insert("xiang", "ㄒㄧㄤ");
        m.insert("xiao", "ㄒㄧㄠ");
        m.insert("xie", "ㄒㄧㄝ");
        m.insert("xin", "ㄒㄧㄣ");
        m.insert("xing", "ㄒㄧㄥ");
        m.insert("xiong", "ㄒㄩㄥ");
        m.insert("xiu", "ㄒㄧㄡ");
        m.insert("xu", "ㄒㄩ");
        m.insert("xuan", "ㄒㄩㄢ");
        m.insert("xue", "ㄒㄩㄝ");
        m.insert("xun", "ㄒㄩㄣ");
        m.insert("ya", "ㄧㄚ");
        m.insert("yan", "ㄧㄢ");
        m.insert("yang", "ㄧㄤ");
        m.insert("yao", "ㄧㄠ");
        m.insert("ye", "ㄧㄝ");
        m.insert("yi", "ㄧ");
        m.insert("yin", "ㄧㄣ");
        m.insert("ying", "ㄧㄥ");
        m.insert("yong", "ㄩㄥ");
        m.insert("you", "ㄧㄡ");
        m.insert("yu", "ㄩ");
        m.insert("yuan", "ㄩㄢ");
        m.insert("yue", "ㄩㄝ");
        m.insert("yun", "ㄩㄣ");
        m.insert("z", "ㄗ");
        m.insert("za", "ㄗㄚ");
        m.insert("zai", "ㄗㄞ");
        m.insert("zan", "ㄗㄢ");
        m.insert("zang", "ㄗㄤ");
        m.insert("zao", "ㄗㄠ");
        m.insert("ze", "ㄗㄜ");
        m.insert("zei", "ㄗㄟ");
        m.insert("zen", "ㄗㄣ");
        m.insert("zeng", "ㄗㄥ");
        m.insert("zh", "ㄓ");
        m.insert("zha", "ㄓㄚ");
        m.insert("zhai", "ㄓㄞ");
        m.insert("zhan", "ㄓㄢ");
        m.insert("zhang", "ㄓㄤ");
        m.insert("zhao", "ㄓㄠ");
        m.insert("zhe", "ㄓㄜ");
        m.insert("zhei", "ㄓㄟ");
        m.insert("zhen", "ㄓㄣ");
        m.insert("zheng", "ㄓㄥ");
        m.insert("zhi", "ㄓ");
        m.insert("zhong", "ㄓㄨㄥ");
        m.insert("zhou", "ㄓㄡ");
        m.insert("zhu", "ㄓㄨ");
        m.insert("zhua", "ㄓㄨㄚ");
        m.insert("zhuai", "ㄓㄨㄞ");
        m.insert("zhuan", "ㄓㄨㄢ");
        m.insert("zhuang", "ㄓㄨㄤ");
        m.insert("zhui", "ㄓㄨㄟ");
        m.insert("zhun", "ㄓㄨㄣ");
        m.insert("zhuo", "ㄓㄨㄛ");
        m.insert("zi", "ㄗ");
        m.insert("zong", "ㄗㄨㄥ");
        m.insert("zou", "ㄗㄡ");
        m.insert("zu", "ㄗㄨ");
        m.insert("zuan", "ㄗㄨㄢ");
        m.insert("zui", "ㄗㄨㄟ");
        m.insert("zun", "ㄗㄨㄣ");
        m.insert("zuo", "ㄗㄨㄛ");
        m
    });

/// Bopomofo glyph string -> pinyin spelling. Where several spellings share a
/// bopomofo form (`lue`/`lve`), the first spelling in sorted order wins.
pub static BOPOMOFO_HANYU_PINYIN_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        let mut keys: Vec<&str> = HANYU_PINYIN_BOPOMOFO_MAP.keys().copied().collect();
        keys.sort_unstable();
        let mut m = HashMap::new();
        for pinyin in keys {
            m.entry(HANYU_PINYIN_BOPOMOFO_MAP[pinyin]).or_insert(pinyin);
        }
        m
    });

/// Valid standalone pinyin syllables. Bare shengmu fragments are not listed
/// here; `PINYIN_INCOMPLETE` entries get their `IS_PINYIN` flag through
/// `SHENGMU_LIST` membership instead.
pub static HANYU_PINYIN_LIST: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "ba", "bai", "ban", "bang", "bao", "bei",
    "ben", "beng", "bi", "bian", "biao", "bie", "bin", "bing", "bo", "bu",
    "ca", "cai", "can", "cang", "cao", "ce", "cen", "ceng", "cha", "chai",
    "chan", "chang", "chao", "che", "chen", "cheng", "chi", "chong", "chou", "chu",
    "chua", "chuai", "chuan", "chuang", "chui", "chun", "chuo", "ci",
    "cong", "cou", "cu", "cuan", "cui", "cun", "cuo", "da", "dai", "dan",
    "dang", "dao", "de", "dei", "den", "deng", "di", "dia", "dian", "diao",
    "die", "ding", "diu", "dong", "dou", "du", "duan", "dui", "dun", "duo",
    "e", "ei", "en", "er", "fa", "fan", "fang", "fei", "fen", "feng", "fo",
    "fou", "fu", "ga", "gai", "gan", "gang", "gao", "ge", "gei", "gen",
    "geng", "gong", "gou", "gu", "gua", "guai", "guan", "guang", "gui",
    "gun", "guo", "ha", "hai", "han", "hang", "hao", "he", "hei", "hen",
    "heng", "hong", "hou", "hu", "hua", "huai", "huan", "huang", "hui",
    "hun", "huo", "ji", "jia", "jian", "jiang", "jiao", "jie", "jin",
    "jing", "jiong", "jiu", "ju", "juan", "jue", "jun", "ka", "kai", "kan",
    "kang", "kao", "ke", "kei", "ken", "keng", "kong", "kou", "ku", "kua",
    "kuai", "kuan", "kuang", "kui", "kun", "kuo", "la", "lai", "lan",
    "lang", "lao", "le", "lei", "leng", "li", "lia", "lian", "liang",
    "liao", "lie", "lin", "ling", "liu", "long", "lou", "lu", "luan", "lue",
    "lun", "luo", "lv", "lve", "ma", "mai", "man", "mang", "mao", "mei",
    "men", "meng", "mi", "mian", "miao", "mie", "min", "ming", "miu", "mo",
    "mou", "mu", "na", "nai", "nan", "nang", "nao", "ne", "nei", "nen",
    "neng", "ni", "nian", "niang", "niao", "nie", "nin", "ning", "niu",
    "nong", "nou", "nu", "nuan", "nue", "nuo", "nv", "nve", "o", "ou", "pa",
    "pai", "pan", "pang", "pao", "pei", "pen", "peng", "pi", "pian", "piao",
    "pie", "pin", "ping", "po", "pou", "pu", "qi", "qia", "qian", "qiang",
    "qiao", "qie", "qin", "qing", "qiong", "qiu", "qu", "quan", "que",
    "qun", "ran", "rang", "rao", "re", "ren", "reng", "ri", "rong", "rou", "ru",
    "rua", "ruan", "rui", "run", "ruo", "sa", "sai", "san", "sang", "sao",
    "se", "sen", "seng", "sha", "shai", "shan", "shang", "shao", "she",
    "shei", "shen", "sheng", "shi", "shou", "shu", "shua", "shuai", "shuan",
    "shuang", "shui", "shun", "shuo", "si", "song", "sou", "su", "suan",
    "sui", "sun", "suo", "ta", "tai", "tan", "tang", "tao", "te", "tei",
    "teng", "ti", "tian", "tiao", "tie", "ting", "tong", "tou", "tu",
    "tuan", "tui", "tun", "tuo", "wa", "wai", "wan", "wang", "wei", "wen",
    "weng", "wo", "wu", "xi", "xia", "xian", "xiang", "xiao", "xie", "xin",
    "xing", "xiong", "xiu", "xu", "xuan", "xue", "xun", "ya", "yan", "yang",
    "yao", "ye", "yi", "yin", "ying", "yong", "you", "yu", "yuan", "yue",
    "yun", "za", "zai", "zan", "zang", "zao", "ze", "zei", "zen", "zeng",
    "zha", "zhai", "zhan", "zhang", "zhao", "zhe", "zhei", "zhen", "zheng",
    "zhi", "zhong", "zhou", "zhu", "zhua", "zhuai", "zhuan", "zhuang", "zhui",
    "zhun", "zhuo", "zi", "zong", "zou", "zu", "zuan", "zui", "zun", "zuo"
];

/// Initial-only fragments, sorted. `w` and `y` are included even though they
/// have no bopomofo initial glyph; the decoder assigns them their own initial
/// classes straight from the spelling.
pub static SHENGMU_LIST: &[&str] = &[
    "b", "c", "ch", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r",
    "s", "sh", "t", "w", "x", "y", "z", "zh",
];

/// Syllables whose bopomofo form is a lone initial glyph yet denote a complete
/// syllable. The decoder injects an implicit `ㄧ` medial for these so they stay
/// distinct from the matching incomplete fragment (`zhi` vs `zh`).
pub static SPECIAL_INITIAL_SET: &[&str] = &["chi", "ci", "ri", "shi", "si", "zhi", "zi"];

// Per-glyph correspondences for the two alternate romanizations. These are the
// source of truth for the derived bopomofo-keyed maps below.

const LUOMA_GLYPHS: &[(char, &str)] = &[
    ('ㄅ', "p"), ('ㄆ', "ph"), ('ㄇ', "m"), ('ㄈ', "f"), ('ㄉ', "t"),
    ('ㄊ', "th"), ('ㄋ', "n"), ('ㄌ', "l"), ('ㄍ', "k"), ('ㄎ', "kh"),
    ('ㄏ', "h"), ('ㄐ', "ts"), ('ㄑ', "tsh"), ('ㄒ', "s"), ('ㄓ', "ts"),
    ('ㄔ', "tsh"), ('ㄕ', "s"), ('ㄖ', "j"), ('ㄗ', "ts"), ('ㄘ', "tsh"),
    ('ㄙ', "s"), ('ㄧ', "i"), ('ㄨ', "u"), ('ㄩ', "y"), ('ㄚ', "a"),
    ('ㄛ', "o"), ('ㄜ', "e"), ('ㄝ', "e"), ('ㄞ', "ai"), ('ㄟ', "ei"),
    ('ㄠ', "au"), ('ㄡ', "ou"), ('ㄢ', "an"), ('ㄣ', "en"), ('ㄤ', "ang"),
    ('ㄥ', "eng"), ('ㄦ', "er"),
];

const SECONDARY_GLYPHS: &[(char, &str)] = &[
    ('ㄅ', "b"), ('ㄆ', "p"), ('ㄇ', "m"), ('ㄈ', "f"), ('ㄉ', "d"),
    ('ㄊ', "t"), ('ㄋ', "n"), ('ㄌ', "l"), ('ㄍ', "g"), ('ㄎ', "k"),
    ('ㄏ', "h"), ('ㄐ', "j"), ('ㄑ', "ch"), ('ㄒ', "sh"), ('ㄓ', "j"),
    ('ㄔ', "ch"), ('ㄕ', "sh"), ('ㄖ', "r"), ('ㄗ', "tz"), ('ㄘ', "ts"),
    ('ㄙ', "s"), ('ㄧ', "i"), ('ㄨ', "u"), ('ㄩ', "iu"), ('ㄚ', "a"),
    ('ㄛ', "o"), ('ㄜ', "e"), ('ㄝ', "e"), ('ㄞ', "ai"), ('ㄟ', "ei"),
    ('ㄠ', "au"), ('ㄡ', "ou"), ('ㄢ', "an"), ('ㄣ', "en"), ('ㄤ', "ang"),
    ('ㄥ', "eng"), ('ㄦ', "er"),
];

fn romanize(bopomofo: &str, glyphs: &[(char, &str)]) -> String {
    bopomofo
        .chars()
        .filter_map(|g| glyphs.iter().find(|(c, _)| *c == g).map(|(_, s)| *s))
        .collect()
}

fn derived_map(glyphs: &'static [(char, &str)]) -> HashMap<&'static str, String> {
    let mut m = HashMap::new();
    for &bopomofo in HANYU_PINYIN_BOPOMOFO_MAP.values() {
        m.entry(bopomofo)
            .or_insert_with(|| romanize(bopomofo, glyphs));
    }
    m
}

/// Bopomofo glyph string -> luoma romanization, total over catalog forms.
pub static BOPOMOFO_LUOMA_PINYIN_MAP: Lazy<HashMap<&'static str, String>> =
    Lazy::new(|| derived_map(LUOMA_GLYPHS));

/// Bopomofo glyph string -> secondary-bopomofo romanization, total over
/// catalog forms.
pub static BOPOMOFO_SECONDARY_BOPOMOFO_MAP: Lazy<HashMap<&'static str, String>> =
    Lazy::new(|| derived_map(SECONDARY_GLYPHS));

/// Catalog consistency check: every declared pinyin syllable must carry a
/// bopomofo mapping. A miss is a defect in the static data and aborts the
/// build naming the spelling.
pub fn check_catalog() -> Result<(), TableError> {
    for pinyin in HANYU_PINYIN_LIST {
        if !HANYU_PINYIN_BOPOMOFO_MAP.contains_key(pinyin) {
            return Err(TableError::MissingBopomofo {
                pinyin: (*pinyin).to_string(),
            });
        }
    }
    for shengmu in SHENGMU_LIST {
        if matches!(*shengmu, "w" | "y") {
            continue;
        }
        if !HANYU_PINYIN_BOPOMOFO_MAP.contains_key(shengmu) {
            return Err(TableError::MissingBopomofo {
                pinyin: (*shengmu).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        check_catalog().unwrap();
    }

    #[test]
    fn known_mappings() {
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["ye"], "ㄧㄝ");
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["zhang"], "ㄓㄤ");
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["xiong"], "ㄒㄩㄥ");
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["zhi"], "ㄓ");
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["zh"], "ㄓ");
        assert_eq!(HANYU_PINYIN_BOPOMOFO_MAP["ju"], "ㄐㄩ");
    }

    #[test]
    fn reverse_map_prefers_sorted_first() {
        // "lue" and "lve" share ㄌㄩㄝ; "lue" sorts first.
        assert_eq!(BOPOMOFO_HANYU_PINYIN_MAP["ㄌㄩㄝ"], "lue");
        assert_eq!(BOPOMOFO_HANYU_PINYIN_MAP["ㄧㄝ"], "ye");
    }

    #[test]
    fn fragments_are_not_full_syllables() {
        for shengmu in SHENGMU_LIST {
            assert!(
                !HANYU_PINYIN_LIST.contains(shengmu),
                "{shengmu} listed both as fragment and full syllable"
            );
        }
    }

    #[test]
    fn derived_romanizations() {
        assert_eq!(BOPOMOFO_LUOMA_PINYIN_MAP["ㄋㄧ"], "ni");
        assert_eq!(BOPOMOFO_LUOMA_PINYIN_MAP["ㄅㄚ"], "pa");
        assert_eq!(BOPOMOFO_SECONDARY_BOPOMOFO_MAP["ㄅㄚ"], "ba");
        assert_eq!(BOPOMOFO_SECONDARY_BOPOMOFO_MAP["ㄗ"], "tz");
    }
}
