//! Words left out of the word cloud and the trending list.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// General English stopwords used by word-cloud generators.
pub const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm", "i've",
    "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k", "let's",
    "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Indonesian connectors, generic news-site vocabulary and names that say
/// nothing about health topics.
pub const NEWS: &[&str] = &[
    "apa", "cara", "bikin", "kenali", "gejala", "lagi", "foto", "ajak", "tidak", "bareng",
    "dalam", "setelah", "sering", "tips", "kamu", "kota", "jam", "banyak", "turis", "viral",
    "potret", "untuk", "dari", "yang", "dan", "dengan", "pada", "akan", "juga", "saat", "itu",
    "ini", "sebagai", "tak", "oleh", "di", "ke", "ada", "karena", "agar", "jadi", "lebih",
    "mari", "anak", "hari", "bisa", "tahun", "hingga", "muda", "tua", "robby", "purba", "miss",
    "dedi", "mulyadi", "rcti", "eps", "ala", "dunia", "daftar", "kisah", "serial", "series",
    "ungkap", "fakta", "tapi", "mana", "melihat", "netizen", "video", "cukup", "paling",
    "langsung", "perlu", "masih", "muncul", "indonesia", "bulan", "orang", "sehat", "diri",
    "negara", "rumah", "bayar", "dokter", "rambut", "cantik", "penumpang", "pesawat", "ayam",
    "jakarta", "bandung", "saudi", "china", "juta", "meil", "mei", "pagi", "kembali", "alami",
    "selama", "ikut", "perempuan", "pria", "beli", "baru", "lama", "cepat", "terus", "guna",
    "buat", "salah", "cuma", "terbaik", "pentingnya", "vision", "langit", "terjadi", "naik",
    "masa", "hanya",
];

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> =
        ENGLISH.iter().chain(NEWS.iter()).copied().collect();
}

/// The combined, lower-case stopword set.
pub fn stopwords() -> &'static HashSet<&'static str> {
    &STOPWORDS
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
