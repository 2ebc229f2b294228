//! Canned example datasets.
//!
//! Each builder returns the text of a puzzle definition and its matching
//! forbidden-states list, in the exact formats `loader` reads. The `gen`
//! subcommand writes them to disk; the classic pair is also checked in
//! under `data/`.

/// A puzzle definition plus its forbidden-states list, both as file
/// bodies.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub puzzle: String,
    pub forbidden: String,
}

/// The textbook instance: Farmer, Wolf, Goat, and Cabbage cross from the
/// right bank to the left. Six forbidden configurations keep the wolf
/// from the goat and the goat from the cabbage whenever the farmer is on
/// the other bank.
pub fn classic() -> Dataset {
    Dataset {
        puzzle: "Farmer Wolf Goat Cabbage\n\
                 0 0 0 0\n\
                 1 1 1 1\n"
            .to_string(),
        forbidden: "6\n\
                    0 1 1 0\n\
                    0 1 1 1\n\
                    0 0 1 1\n\
                    1 0 0 1\n\
                    1 0 0 0\n\
                    1 1 0 0\n"
            .to_string(),
    }
}

/// Consonants used by [`alphabet`]; `b`, the first, is the operator.
const CONSONANTS: &str = "bcdfg";
const VOWELS: &str = "aeiou";
const SYMBOLS: &str = "!@#$%";

/// A combinatorial variant over fifteen single-character items: five
/// consonants, five vowels, five symbols, all crossing right to left.
///
/// A consonant, a vowel, and a symbol must never stand alone together.
/// For every such triple (the operator consonant excluded) both the
/// configuration with exactly that triple on the left and its mirror
/// with exactly that triple on the right are forbidden: 200 states.
pub fn alphabet() -> Dataset {
    let names: Vec<String> = CONSONANTS
        .chars()
        .chain(VOWELS.chars())
        .chain(SYMBOLS.chars())
        .map(String::from)
        .collect();
    let n = names.len();

    let vowels_start = CONSONANTS.len();
    let symbols_start = vowels_start + VOWELS.len();

    let mut states = Vec::new();
    for c in 1..vowels_start {
        for v in vowels_start..symbols_start {
            for s in symbols_start..n {
                let mut triple_left = vec![false; n];
                triple_left[c] = true;
                triple_left[v] = true;
                triple_left[s] = true;

                let mut triple_right = vec![true; n];
                triple_right[c] = false;
                triple_right[v] = false;
                triple_right[s] = false;

                states.push(triple_left);
                states.push(triple_right);
            }
        }
    }

    Dataset {
        puzzle: puzzle_file(&names),
        forbidden: forbidden_file(&states),
    }
}

const PIRATES: usize = 3;
const GOLD: usize = 5;

/// The pirates-and-gold variant: a captain ferries three pirates and
/// five gold pieces to the left bank.
///
/// Forbidden are all mutiny configurations: the captain on the left with
/// two or more pirates and fewer gold pieces than pirates, so the crew
/// outnumbers him with nothing to keep them satisfied. The count header
/// comes from the generated list.
pub fn pirates() -> Dataset {
    let mut names = vec!["Captain".to_string()];
    names.extend((0..PIRATES).map(|i| format!("Pirate{i}")));
    names.extend((0..GOLD).map(|i| format!("Gold{i}")));
    let n = names.len();

    let mut states = Vec::new();
    for bits in 0..1u32 << n {
        let flags: Vec<bool> = (0..n).map(|i| (bits >> (n - 1 - i)) & 1 == 1).collect();
        if mutiny(&flags) {
            states.push(flags);
        }
    }

    Dataset {
        puzzle: puzzle_file(&names),
        forbidden: forbidden_file(&states),
    }
}

fn mutiny(flags: &[bool]) -> bool {
    let pirates_left = flags[1..1 + PIRATES].iter().filter(|&&left| left).count();
    let gold_left = flags[1 + PIRATES..].iter().filter(|&&left| left).count();
    flags[0] && pirates_left >= 2 && gold_left < pirates_left
}

/// Renders the three-line puzzle format: names, all-right source,
/// all-left target.
fn puzzle_file(names: &[String]) -> String {
    let n = names.len();
    format!(
        "{}\n{}\n{}\n",
        names.join(" "),
        flag_line(&vec![false; n]),
        flag_line(&vec![true; n])
    )
}

fn forbidden_file(states: &[Vec<bool>]) -> String {
    let mut text = states.len().to_string();
    text.push('\n');
    for state in states {
        text.push_str(&flag_line(state));
        text.push('\n');
    }
    text
}

fn flag_line(flags: &[bool]) -> String {
    flags
        .iter()
        .map(|&left| if left { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}
