use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::heuristic::{Evaluation, Heuristic};

/// Common English words, loosely the Basic English core vocabulary.
const COMMON_WORDS: &[&str] = &[
    "a", "about", "all", "also", "and", "as", "at", "be", "because", "but", "by", "can", "come",
    "could", "day", "do", "even", "find", "first", "for", "from", "get", "give", "go", "have",
    "he", "her", "here", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just",
    "know", "like", "look", "make", "man", "many", "me", "more", "my", "new", "no", "not", "now",
    "of", "on", "one", "only", "or", "other", "our", "out", "over", "say", "see", "she", "so",
    "some", "take", "than", "that", "the", "their", "them", "there", "these", "they", "think",
    "this", "time", "to", "two", "up", "use", "very", "want", "water", "way", "we", "well",
    "were", "what", "when", "which", "who", "will", "with", "would", "write", "you", "your",
    "people", "may", "down", "been", "call", "oil", "sit", "set", "had", "let", "must", "big",
    "high", "such", "follow", "act", "why", "ask", "men", "change", "went", "light", "kind",
    "off", "need", "house", "picture", "try", "us", "again", "animal", "point", "mother",
    "world", "near", "build", "self", "earth", "father", "head", "stand", "own", "page",
    "should", "country", "found", "answer", "school", "grow", "study", "still", "learn",
    "plant", "cover", "food", "sun", "four", "between", "state", "keep", "eye", "never",
    "last", "thought", "city", "tree", "cross", "farm", "hard", "start", "might", "story",
    "saw", "far", "sea", "draw", "left", "late", "run", "dont", "while", "press", "close",
    "night", "real", "life", "few", "north", "book", "carry", "took", "science", "eat",
    "room", "friend", "began", "idea", "fish", "mountain", "stop", "once", "base", "hear",
    "horse", "cut", "sure", "watch", "color", "face", "wood", "main", "enough", "plain",
    "girl", "usual", "young", "ready", "above", "ever", "red", "list", "though", "feel",
    "talk", "bird", "soon", "body", "dog", "family", "direct", "leave", "song", "measure",
    "door", "product", "black", "short", "numeral", "class", "wind", "question", "happen",
    "complete", "ship", "area", "half", "rock", "order", "fire", "south", "problem", "piece",
    "told", "knew", "pass", "since", "top", "whole", "king", "space", "heard", "best", "hour",
    "better", "during", "hundred", "five", "remember", "step", "early", "hold", "west",
    "ground", "interest", "reach", "fast", "verb", "sing", "listen", "six", "table", "travel",
    "less", "morning", "ten", "simple", "several", "vowel", "toward", "war", "lay", "against",
    "pattern", "slow", "center", "love", "person", "money", "serve", "appear", "road", "map",
    "rain", "rule", "govern", "pull", "cold", "notice", "voice", "unit", "power", "town",
    "fine", "certain", "fly", "fall", "lead", "cry", "dark", "machine", "note", "wait",
    "plan", "figure", "star", "box", "noun", "field", "rest", "correct", "able", "pound",
    "done", "beauty", "drive", "stood", "contain", "front", "teach", "week", "final", "gave",
    "green", "oh", "quick", "develop", "ocean", "warm", "free", "minute", "strong", "special",
    "mind", "behind", "clear", "tail", "produce", "fact", "street", "inch", "multiply",
    "nothing", "course", "stay", "wheel", "full", "force", "blue", "object", "decide",
    "surface", "deep", "moon", "island", "foot", "system", "busy", "test", "record", "boat",
    "common", "gold", "possible", "plane", "stead", "dry", "wonder", "laugh", "thousands",
    "ago", "ran", "check", "game", "shape", "equate", "miss", "brought", "heat", "snow",
    "tire", "bring", "yes", "distant", "fill", "east", "paint", "language", "among", "grand",
    "ball", "yet", "wave", "drop", "heart", "am", "present", "heavy", "dance", "engine",
    "position", "arm", "wide", "sail", "material", "size", "vary", "settle", "speak",
    "weight", "general", "ice", "matter", "circle", "pair", "include", "divide", "syllable",
    "felt", "perhaps", "pick", "sudden", "count", "square", "reason", "length", "represent",
    "art", "subject", "region", "energy", "hunt", "probable", "bed", "brother", "egg",
    "ride", "cell", "believe", "fraction", "forest", "race", "window", "store", "summer",
    "train", "sleep", "prove", "lone", "leg", "exercise", "wall", "catch", "mount", "wish",
    "sky", "board", "joy", "winter", "sat", "written", "wild", "instrument", "kept", "glass",
    "grass", "cow", "job", "edge", "sign", "visit", "past", "soft", "fun", "bright", "gas",
    "weather", "month", "million", "bear", "finish", "happy", "hope", "flower", "clothe",
    "strange", "gone", "jump", "baby", "eight", "village", "meet", "root", "buy", "raise",
    "solve", "metal", "whether", "push", "seven", "paragraph", "third", "shall", "held",
    "hair", "describe", "cook", "floor", "either", "result", "burn", "hill", "safe", "cat",
    "century", "consider", "type", "law", "bit", "coast", "copy", "phrase", "silent",
    "tall", "sand", "soil", "roll", "temperature", "finger", "industry", "value", "fight",
    "lie", "beat", "excite", "natural", "view", "sense", "ear", "else", "quite", "broke",
    "case", "middle", "kill", "son", "lake", "moment", "scale", "loud", "spring", "observe",
    "child", "straight", "consonant", "nation", "dictionary", "milk", "speed", "method",
    "organ", "pay", "age", "section", "dress", "cloud", "surprise", "quiet", "stone",
    "tiny", "climb", "bad", "blood", "touch", "grew", "cent", "mix", "team", "wire",
    "cost", "lost", "brown", "wear", "garden", "equal", "sent", "choose", "fell", "fit",
    "flow", "fair", "bank", "collect", "save", "control", "decimal", "gentle", "woman",
    "captain", "practice", "separate", "difficult", "doctor", "please", "protect", "noon",
    "whose", "locate", "ring", "character", "insect", "caught", "period", "indicate",
    "radio", "spoke", "atom", "human", "history", "effect", "electric", "expect", "crop",
    "modern", "element", "hit", "student", "corner", "party", "supply", "bone", "rail",
    "imagine", "provide", "agree", "thus", "capital", "wont", "chair", "danger", "fruit",
    "rich", "thick", "soldier", "process", "operate", "guess", "necessary", "sharp",
    "wing", "create", "neighbor", "wash", "bat", "rather", "crowd", "corn", "compare",
    "poem", "string", "bell", "depend", "meat", "rub", "tube", "famous", "dollar",
    "stream", "fear", "sight", "thin", "triangle", "planet", "hurry", "chief", "colony",
    "clock", "mine", "tie", "enter", "major", "fresh", "search", "send", "yellow", "gun",
    "allow", "print", "dead", "spot", "desert", "suit", "current", "lift", "rose",
    "continue", "block", "chart", "hat", "sell", "success", "company", "subtract",
    "event", "particular", "deal", "swim", "term", "opposite", "wife", "shoe", "shoulder",
    "spread", "arrange", "camp", "invent", "cotton", "born", "determine", "quart", "nine",
    "truck", "noise", "level", "chance", "gather", "shop", "stretch", "throw", "shine",
    "property", "column", "molecule", "select", "wrong", "gray", "repeat", "require",
    "broad", "prepare", "salt", "nose", "plural", "anger", "claim", "continent", "oxygen",
    "sugar", "death", "pretty", "skill", "women", "season", "solution", "magnet",
    "silver", "thank", "branch", "match", "suffix", "especially", "fig", "afraid",
    "huge", "sister", "steel", "discuss", "forward", "similar", "guide", "experience",
    "score", "apple", "bought", "led", "pitch", "coat", "mass", "card", "band", "rope",
    "slip", "win", "dream", "evening", "condition", "feed", "tool", "total", "basic",
    "smell", "valley", "nor", "double", "seat", "arrive", "master", "track", "parent",
    "shore", "division", "sheet", "substance", "favor", "connect", "post", "spend",
    "chord", "fat", "glad", "original", "share", "station", "dad", "bread", "charge",
    "proper", "bar", "offer", "segment", "slave", "duck", "instant", "market", "degree",
    "populate", "chick", "dear", "enemy", "reply", "drink", "occur", "support", "speech",
    "nature", "range", "steam", "motion", "path", "liquid", "log", "meant", "quotient",
    "teeth", "shell", "neck",
];

static DICTIONARY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_WORDS.iter().copied().collect());

/// Scores text by the fraction of its whitespace-delimited words found in
/// a fixed common-English word set. Non-letter characters are stripped
/// before matching, so punctuation never hides a word.
#[derive(Clone, Copy, Debug, Default)]
pub struct DictionaryHeuristic;

impl DictionaryHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for DictionaryHeuristic {
    fn name(&self) -> &'static str {
        "Dictionary Matching"
    }

    fn analyze(&self, text: &str) -> Evaluation {
        if text.trim().is_empty() {
            return Evaluation::new(0.0, "No text to analyze");
        }

        let clean: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        let mut total_words = 0usize;
        let mut matched_words = 0usize;
        for word in clean.split_whitespace() {
            total_words += 1;
            if DICTIONARY.contains(word) {
                matched_words += 1;
            }
        }

        if total_words == 0 {
            return Evaluation::new(0.0, "No words found in text");
        }

        let score = matched_words as f64 / total_words as f64;
        Evaluation::new(
            score,
            format!(
                "Found {matched_words}/{total_words} dictionary words ({:.1}%)",
                score * 100.0
            ),
        )
    }
}
