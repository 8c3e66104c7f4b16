//! Static character tables.
//!
//! Every table is a compile-time perfect hash map, so lookups are read-only
//! and safe to share across threads without initialisation. Characters that
//! are not keys of a table pass through the consuming function unchanged.

use phf::phf_map;

// ---------------------------------------------------------------------------
// Diacritics
// ---------------------------------------------------------------------------

/// Accented Latin letter → plain ASCII. Covers the Baltic, Polish, Czech,
/// German and Romance letters that show up in customer names.
pub static DIACRITIC_TO_ASCII: phf::Map<char, &'static str> = phf_map! {
    // Latvian
    'ā' => "a", 'Ā' => "A", 'ē' => "e", 'Ē' => "E", 'ī' => "i", 'Ī' => "I",
    'ū' => "u", 'Ū' => "U", 'ō' => "o", 'Ō' => "O", 'ķ' => "k", 'Ķ' => "K",
    'ļ' => "l", 'Ļ' => "L", 'ņ' => "n", 'Ņ' => "N", 'ģ' => "g", 'Ģ' => "G",
    'č' => "c", 'Č' => "C", 'š' => "s", 'Š' => "S", 'ž' => "z", 'Ž' => "Z",
    'ŗ' => "r", 'Ŗ' => "R",
    // Lithuanian / Polish
    'ą' => "a", 'Ą' => "A", 'ę' => "e", 'Ę' => "E", 'į' => "i", 'Į' => "I",
    'ų' => "u", 'Ų' => "U", 'ń' => "n", 'Ń' => "N", 'ł' => "l", 'Ł' => "L",
    'ś' => "s", 'Ś' => "S", 'ź' => "z", 'Ź' => "Z", 'ż' => "z", 'Ż' => "Z",
    'ć' => "c", 'Ć' => "C", 'ó' => "o", 'Ó' => "O", 'ė' => "e", 'Ė' => "E",
    // Czech / Slovak
    'ř' => "r", 'Ř' => "R", 'ě' => "e", 'Ě' => "E", 'ů' => "u", 'Ů' => "U",
    'ť' => "t", 'Ť' => "T", 'ď' => "d", 'Ď' => "D", 'ň' => "n", 'Ň' => "N",
    'ý' => "y", 'Ý' => "Y",
    // German / Nordic / Estonian
    'ä' => "a", 'Ä' => "A", 'ö' => "o", 'Ö' => "O", 'ü' => "u", 'Ü' => "U",
    'ë' => "e", 'Ë' => "E", 'ï' => "i", 'Ï' => "I", 'ÿ' => "y", 'Ÿ' => "Y",
    'ß' => "ss", 'ẞ' => "SS", 'õ' => "o", 'Õ' => "O", 'å' => "a", 'Å' => "A",
    'ø' => "o", 'Ø' => "O", 'æ' => "ae", 'Æ' => "AE", 'œ' => "oe", 'Œ' => "OE",
    // Romance
    'á' => "a", 'Á' => "A", 'é' => "e", 'É' => "E", 'í' => "i", 'Í' => "I",
    'ú' => "u", 'Ú' => "U", 'à' => "a", 'À' => "A", 'è' => "e", 'È' => "E",
    'ì' => "i", 'Ì' => "I", 'ò' => "o", 'Ò' => "O", 'ù' => "u", 'Ù' => "U",
    'â' => "a", 'Â' => "A", 'ê' => "e", 'Ê' => "E", 'î' => "i", 'Î' => "I",
    'ô' => "o", 'Ô' => "O", 'û' => "u", 'Û' => "U", 'ã' => "a", 'Ã' => "A",
    'ñ' => "n", 'Ñ' => "N", 'ç' => "c", 'Ç' => "C",
};

/// Lowercase ASCII letter → the accented letters it is most often stored as,
/// most likely first. Used to re-insert diacritics into plain-ASCII queries.
pub static ASCII_TO_DIACRITICS: phf::Map<char, &'static str> = phf_map! {
    'a' => "āąä",
    'c' => "čć",
    'e' => "ēęė",
    'g' => "ģ",
    'i' => "īį",
    'k' => "ķ",
    'l' => "ļł",
    'n' => "ņń",
    'o' => "ōöó",
    'r' => "ŗ",
    's' => "šś",
    'u' => "ūųü",
    'z' => "žźż",
};

// ---------------------------------------------------------------------------
// Keyboard layouts (Russian JCUKEN <-> US QWERTY, same physical key)
// ---------------------------------------------------------------------------

pub static KEYBOARD_CYRILLIC_TO_LATIN: phf::Map<char, char> = phf_map! {
    'й' => 'q', 'ц' => 'w', 'у' => 'e', 'к' => 'r', 'е' => 't', 'н' => 'y',
    'г' => 'u', 'ш' => 'i', 'щ' => 'o', 'з' => 'p', 'х' => '[', 'ъ' => ']',
    'ф' => 'a', 'ы' => 's', 'в' => 'd', 'а' => 'f', 'п' => 'g', 'р' => 'h',
    'о' => 'j', 'л' => 'k', 'д' => 'l', 'ж' => ';', 'э' => '\'',
    'я' => 'z', 'ч' => 'x', 'с' => 'c', 'м' => 'v', 'и' => 'b', 'т' => 'n',
    'ь' => 'm', 'б' => ',', 'ю' => '.', 'ё' => '`',
    'Й' => 'Q', 'Ц' => 'W', 'У' => 'E', 'К' => 'R', 'Е' => 'T', 'Н' => 'Y',
    'Г' => 'U', 'Ш' => 'I', 'Щ' => 'O', 'З' => 'P', 'Х' => '{', 'Ъ' => '}',
    'Ф' => 'A', 'Ы' => 'S', 'В' => 'D', 'А' => 'F', 'П' => 'G', 'Р' => 'H',
    'О' => 'J', 'Л' => 'K', 'Д' => 'L', 'Ж' => ':', 'Э' => '"',
    'Я' => 'Z', 'Ч' => 'X', 'С' => 'C', 'М' => 'V', 'И' => 'B', 'Т' => 'N',
    'Ь' => 'M', 'Б' => '<', 'Ю' => '>', 'Ё' => '~',
    // Ukrainian letters that replace Russian ones on the same keys
    'і' => 's', 'ї' => ']', 'є' => '\'', 'І' => 'S', 'Ї' => '}', 'Є' => '"',
};

pub static KEYBOARD_LATIN_TO_CYRILLIC: phf::Map<char, char> = phf_map! {
    'q' => 'й', 'w' => 'ц', 'e' => 'у', 'r' => 'к', 't' => 'е', 'y' => 'н',
    'u' => 'г', 'i' => 'ш', 'o' => 'щ', 'p' => 'з', '[' => 'х', ']' => 'ъ',
    'a' => 'ф', 's' => 'ы', 'd' => 'в', 'f' => 'а', 'g' => 'п', 'h' => 'р',
    'j' => 'о', 'k' => 'л', 'l' => 'д', ';' => 'ж', '\'' => 'э',
    'z' => 'я', 'x' => 'ч', 'c' => 'с', 'v' => 'м', 'b' => 'и', 'n' => 'т',
    'm' => 'ь', ',' => 'б', '.' => 'ю', '`' => 'ё',
    'Q' => 'Й', 'W' => 'Ц', 'E' => 'У', 'R' => 'К', 'T' => 'Е', 'Y' => 'Н',
    'U' => 'Г', 'I' => 'Ш', 'O' => 'Щ', 'P' => 'З', '{' => 'Х', '}' => 'Ъ',
    'A' => 'Ф', 'S' => 'Ы', 'D' => 'В', 'F' => 'А', 'G' => 'П', 'H' => 'Р',
    'J' => 'О', 'K' => 'Л', 'L' => 'Д', ':' => 'Ж', '"' => 'Э',
    'Z' => 'Я', 'X' => 'Ч', 'C' => 'С', 'V' => 'М', 'B' => 'И', 'N' => 'Т',
    'M' => 'Ь', '<' => 'Б', '>' => 'Ю', '~' => 'Ё',
};

// ---------------------------------------------------------------------------
// Phonetic transliteration
// ---------------------------------------------------------------------------

/// Cyrillic → Latin by sound. Hard and soft signs are dropped.
pub static PHONETIC_CYRILLIC_TO_LATIN: phf::Map<char, &'static str> = phf_map! {
    'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d", 'е' => "e",
    'ё' => "e", 'ж' => "zh", 'з' => "z", 'и' => "i", 'й' => "j", 'к' => "k",
    'л' => "l", 'м' => "m", 'н' => "n", 'о' => "o", 'п' => "p", 'р' => "r",
    'с' => "s", 'т' => "t", 'у' => "u", 'ф' => "f", 'х' => "h", 'ц' => "c",
    'ч' => "ch", 'ш' => "sh", 'щ' => "sch", 'ъ' => "", 'ы' => "y", 'ь' => "",
    'э' => "e", 'ю' => "ju", 'я' => "ja",
    'і' => "i", 'ї' => "ji", 'є' => "je", 'ґ' => "g", 'ў' => "u",
    'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D", 'Е' => "E",
    'Ё' => "E", 'Ж' => "Zh", 'З' => "Z", 'И' => "I", 'Й' => "J", 'К' => "K",
    'Л' => "L", 'М' => "M", 'Н' => "N", 'О' => "O", 'П' => "P", 'Р' => "R",
    'С' => "S", 'Т' => "T", 'У' => "U", 'Ф' => "F", 'Х' => "H", 'Ц' => "C",
    'Ч' => "Ch", 'Ш' => "Sh", 'Щ' => "Sch", 'Ъ' => "", 'Ы' => "Y", 'Ь' => "",
    'Э' => "E", 'Ю' => "Ju", 'Я' => "Ja",
    'І' => "I", 'Ї' => "Ji", 'Є' => "Je", 'Ґ' => "G", 'Ў' => "U",
};

// ---------------------------------------------------------------------------
// QWERTY neighbours
// ---------------------------------------------------------------------------

/// Physically adjacent keys (horizontal, vertical, diagonal) for each
/// lowercase letter. Uppercase lookups go through the lowercase entry.
pub static QWERTY_NEIGHBORS: phf::Map<char, &'static str> = phf_map! {
    'q' => "was",
    'w' => "qeasd",
    'e' => "wrsdf",
    'r' => "etdfg",
    't' => "ryfgh",
    'y' => "tughj",
    'u' => "yihjk",
    'i' => "uojkl",
    'o' => "ipkl",
    'p' => "ol",
    'a' => "qwsz",
    's' => "adwezx",
    'd' => "sferxc",
    'f' => "dgrtcv",
    'g' => "fhtyvb",
    'h' => "gjyubn",
    'j' => "hkuinm",
    'k' => "jliom",
    'l' => "kopm",
    'z' => "asx",
    'x' => "zcsd",
    'c' => "xvdf",
    'v' => "cbfg",
    'b' => "vngh",
    'n' => "bmhj",
    'm' => "njkl",
};

/// Priority order for the single-best-guess semantic corrector.
///
/// Each `(from, to)` pair is an edge of [`QWERTY_NEIGHBORS`]; the corrector
/// applies the first pair whose `from` letter occurs in the query. The order
/// is hand-tuned against observed search misses (vowel slips first, then the
/// most frequent consonant slips) and directly changes which rewrite gets an
/// embedding call. Reordering it is a product decision, not a refactor.
pub static SEMANTIC_TYPO_PAIRS: &[(char, char)] = &[
    ('o', 'i'), ('i', 'o'), ('u', 'i'), ('i', 'u'), ('e', 'r'), ('r', 'e'),
    ('a', 's'), ('s', 'a'), ('y', 'u'), ('u', 'y'), ('n', 'm'), ('m', 'n'),
    ('e', 'w'), ('t', 'r'), ('r', 't'), ('k', 'l'), ('l', 'k'), ('d', 's'),
    ('s', 'd'), ('c', 'v'), ('v', 'c'), ('b', 'n'), ('g', 'h'), ('h', 'g'),
    ('j', 'k'), ('p', 'o'), ('o', 'p'), ('z', 'x'), ('x', 'z'), ('q', 'w'),
    ('w', 'e'), ('f', 'g'),
];

// ---------------------------------------------------------------------------
// Name spelling variants
// ---------------------------------------------------------------------------

/// Normalised whole word → alternate spellings of the same given name or
/// surname, as they tend to appear in passports, tickets and CRM records.
pub static NAME_VARIANTS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "natalija" => &["natalja", "natalia", "nataliya"],
    "natalja" => &["natalija", "natalia", "nataliya"],
    "natalia" => &["natalija", "natalja", "nataliya"],
    "nataliya" => &["natalija", "natalja", "natalia"],
    "vjaceslavs" => &["vjaceslav", "vacheslav", "vyacheslav"],
    "vjaceslav" => &["vjaceslavs", "vacheslav", "vyacheslav"],
    "vacheslav" => &["vjaceslavs", "vjaceslav", "vyacheslav"],
    "vyacheslav" => &["vjaceslavs", "vjaceslav", "vacheslav"],
    "irina" => &["iryna"],
    "iryna" => &["irina"],
    "jelena" => &["elena", "yelena"],
    "elena" => &["jelena", "yelena"],
    "yelena" => &["jelena", "elena"],
    "aleksandrs" => &["aleksandr", "alexander", "alexandr"],
    "aleksandr" => &["aleksandrs", "alexander", "alexandr"],
    "alexander" => &["aleksandrs", "aleksandr", "alexandr"],
    "alexandr" => &["aleksandrs", "aleksandr", "alexander"],
    "sergejs" => &["sergej", "sergey", "sergei"],
    "sergej" => &["sergejs", "sergey", "sergei"],
    "sergey" => &["sergejs", "sergej", "sergei"],
    "sergei" => &["sergejs", "sergej", "sergey"],
    "jurijs" => &["jurij", "yuri", "yury", "yuriy"],
    "jurij" => &["jurijs", "yuri", "yury", "yuriy"],
    "yuri" => &["jurijs", "jurij", "yury", "yuriy"],
    "yury" => &["jurijs", "jurij", "yuri", "yuriy"],
    "yuriy" => &["jurijs", "jurij", "yuri", "yury"],
    "andrejs" => &["andrej", "andrey", "andrei"],
    "andrej" => &["andrejs", "andrey", "andrei"],
    "andrey" => &["andrejs", "andrej", "andrei"],
    "andrei" => &["andrejs", "andrej", "andrey"],
    "dmitrijs" => &["dmitrij", "dmitry", "dmitriy"],
    "dmitrij" => &["dmitrijs", "dmitry", "dmitriy"],
    "dmitry" => &["dmitrijs", "dmitrij", "dmitriy"],
    "dmitriy" => &["dmitrijs", "dmitrij", "dmitry"],
    "tatjana" => &["tatiana", "tatyana"],
    "tatiana" => &["tatjana", "tatyana"],
    "tatyana" => &["tatjana", "tatiana"],
    "julija" => &["julia", "yulia", "yuliya"],
    "julia" => &["julija", "yulia", "yuliya"],
    "yulia" => &["julija", "julia", "yuliya"],
    "yuliya" => &["julija", "julia", "yulia"],
    "jevgenijs" => &["jevgenij", "evgeny", "evgeniy", "yevgeny"],
    "jevgenij" => &["jevgenijs", "evgeny", "evgeniy", "yevgeny"],
    "evgeny" => &["jevgenijs", "jevgenij", "evgeniy", "yevgeny"],
    "evgeniy" => &["jevgenijs", "jevgenij", "evgeny", "yevgeny"],
    "yevgeny" => &["jevgenijs", "jevgenij", "evgeny", "evgeniy"],
    "olga" => &["olha", "olja"],
    "olha" => &["olga", "olja"],
    "olja" => &["olga", "olha"],
    "mihails" => &["mihail", "mikhail"],
    "mihail" => &["mihails", "mikhail"],
    "mikhail" => &["mihails", "mihail"],
    "janis" => &["jānis"],
    "berzins" => &["bērziņš", "berzinsh"],
    "berzinsh" => &["bērziņš", "berzins"],
};
