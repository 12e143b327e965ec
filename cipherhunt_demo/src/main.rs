use anyhow::{Context, Result, bail};
use cipherhunt_core::{
    AffineCipher, AtbashCipher, CaesarCipher, Candidate, Cipher, DictionaryHeuristic,
    GraphemeHeuristic, Heuristic, LetterFrequencyHeuristic, NgramHeuristic, PlayfairCipher,
    ProgressObserver, SearchOptions, TOP_K, VigenereCipher, alphabet, search_all,
    vigenere_key_space_size,
};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{LevelFilter, debug};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cipherhunt",
    author,
    version,
    about = "Brute-force cryptanalysis of classical substitution ciphers"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Caesar,
    Affine,
    Vigenere,
    Atbash,
    Playfair,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every .txt file in a directory for the best decryptions.
    Crack {
        /// Directory holding the ciphertext files.
        #[arg(long, value_name = "DIR", default_value = "INPUT")]
        input: PathBuf,
        /// Markdown report destination.
        #[arg(long, value_name = "FILE", default_value = "output.md")]
        out: PathBuf,
        /// Optional machine-readable copy of the report.
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
        /// Vigenère worker pool size.
        #[arg(long, value_name = "N", default_value_t = cipherhunt_core::DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Encrypt a message with a chosen cipher and key.
    Encrypt {
        #[arg(long, value_enum)]
        cipher: CipherArg,
        /// Key material; format depends on the cipher (see decrypt).
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
        #[arg(long, value_name = "TEXT")]
        message: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Decrypt a message with a chosen cipher and key.
    Decrypt {
        #[arg(long, value_enum)]
        cipher: CipherArg,
        /// caesar: shift number; affine: "a,b"; vigenere/playfair: key
        /// string; atbash: no key.
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
        #[arg(long, value_name = "TEXT")]
        message: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Score a text with every heuristic.
    Analyze {
        #[arg(long, value_name = "TEXT")]
        message: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Walk through encrypt/decrypt examples for each cipher.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Crack {
            input,
            out,
            json,
            workers,
        } => cmd_crack(input, out, json, workers),
        Commands::Encrypt {
            cipher,
            key,
            message,
            input,
        } => cmd_transform(cipher, key, message, input, false),
        Commands::Decrypt {
            cipher,
            key,
            message,
            input,
        } => cmd_transform(cipher, key, message, input, true),
        Commands::Analyze { message, input } => cmd_analyze(message, input),
        Commands::Demo => cmd_demo(),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// 60-column progress bar redrawn in place, throttled by key count.
struct ConsoleProgress {
    label: &'static str,
}

const BAR_WIDTH: usize = 60;
const PROGRESS_STRIDE: usize = 100;

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, tested: usize, total: usize) {
        if tested % PROGRESS_STRIDE != 0 && tested != total {
            return;
        }
        let progress = tested as f64 / total.max(1) as f64;
        let filled = (progress * BAR_WIDTH as f64) as usize;
        let bar: String = (0..BAR_WIDTH)
            .map(|slot| if slot < filled { '=' } else { '.' })
            .collect();
        print!(
            "\r  {}: [{bar}] {tested}/{total} ({:.1}%)",
            self.label,
            progress * 100.0
        );
        let _ = io::stdout().flush();
        if tested >= total {
            println!();
        }
    }
}

fn cmd_crack(input: PathBuf, out: PathBuf, json: Option<PathBuf>, workers: usize) -> Result<()> {
    let options = SearchOptions::new(workers)?;
    if !input.is_dir() {
        bail!("input directory {} not found", input.display());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&input)
        .with_context(|| format!("reading directory {}", input.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();
    if files.is_empty() {
        bail!("no .txt files found in {}", input.display());
    }
    println!("Found {} text files", files.len());

    let mut report: Vec<(String, Vec<Candidate>)> = Vec::new();
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        println!("Processing file: {name} (length: {})", content.len());

        let progress = ConsoleProgress { label: "Vigenère" };
        let mut candidates = search_all(&content, &name, &options, &progress)?;
        debug!(
            "{name}: {} candidates over {} vigenere keys",
            candidates.len(),
            vigenere_key_space_size()
        );
        candidates.truncate(TOP_K);

        println!("Top {} decryption candidates:", candidates.len());
        for (rank, candidate) in candidates.iter().enumerate() {
            println!("{}. {candidate}", rank + 1);
        }
        report.push((name, candidates));
    }

    export_markdown(&out, &report)
        .with_context(|| format!("writing report to {}", out.display()))?;
    println!("Results exported to {}", out.display());

    if let Some(path) = json {
        let by_file: serde_json::Map<String, serde_json::Value> = report
            .iter()
            .map(|(name, candidates)| Ok((name.clone(), serde_json::to_value(candidates)?)))
            .collect::<Result<_, serde_json::Error>>()?;
        let serialized = serde_json::to_string_pretty(&by_file)?;
        fs::write(&path, serialized)
            .with_context(|| format!("writing JSON report to {}", path.display()))?;
        println!("JSON copy written to {}", path.display());
    }
    Ok(())
}

fn export_markdown(path: &Path, report: &[(String, Vec<Candidate>)]) -> Result<()> {
    let mut out = String::new();
    for (file, candidates) in report {
        out.push_str(&format!("# {file}\n\n"));
        for (index, candidate) in candidates.iter().enumerate() {
            out.push_str(&format!(
                "## Decryption {}: {} Cipher\n",
                index + 1,
                candidate.cipher_name()
            ));
            out.push_str(&format!("- Cipher: {}\n", candidate.cipher_name()));
            out.push_str(&format!("- Key: {}\n", candidate.key_descriptor()));
            out.push_str(&format!(
                "- Combined Score: {:.3}\n",
                candidate.combined_score()
            ));
            out.push_str(&format!(
                "- Letter Frequency Score: {:.3}\n",
                candidate.letter_frequency_score()
            ));
            out.push_str(&format!(
                "- Dictionary Score: {:.3}\n",
                candidate.dictionary_score()
            ));
            out.push_str(&format!(
                "- Grapheme Score: {:.3}\n",
                candidate.grapheme_score()
            ));
            out.push_str(&format!("- Summary: {}\n", candidate.summary()));
            out.push_str(&format!("\n```\n{}\n```\n\n", candidate.decrypted_text()));
        }
    }
    fs::write(path, out)?;
    Ok(())
}

fn cmd_transform(
    cipher: CipherArg,
    key: Option<String>,
    message: Option<String>,
    input: Option<PathBuf>,
    decrypt: bool,
) -> Result<()> {
    let text = resolve_text(message, input)?;
    let cipher = build_cipher(cipher, key.as_deref())?;
    let output = if decrypt {
        cipher.decrypt(&text)
    } else {
        cipher.encrypt(&text)
    };
    debug!(
        "{} [{}]: {} -> {} chars",
        cipher.name(),
        cipher.key_descriptor(),
        text.len(),
        output.len()
    );
    println!("{output}");
    Ok(())
}

fn build_cipher(cipher: CipherArg, key: Option<&str>) -> Result<Box<dyn Cipher>> {
    match cipher {
        CipherArg::Caesar => {
            let key = key.context("caesar needs --key SHIFT")?;
            let shift: usize = key
                .trim()
                .parse()
                .with_context(|| format!("parsing shift from {key:?}"))?;
            Ok(Box::new(CaesarCipher::new(shift)))
        }
        CipherArg::Affine => {
            let key = key.context("affine needs --key A,B")?;
            let (a, b) = key
                .split_once(',')
                .with_context(|| format!("expected A,B in {key:?}"))?;
            let a: usize = a.trim().parse().context("parsing affine key a")?;
            let b: usize = b.trim().parse().context("parsing affine key b")?;
            Ok(Box::new(AffineCipher::new(a, b)?))
        }
        CipherArg::Vigenere => {
            let key = key.context("vigenere needs --key WORD")?;
            Ok(Box::new(VigenereCipher::new(key)))
        }
        CipherArg::Atbash => {
            if key.is_some() {
                bail!("atbash takes no key");
            }
            Ok(Box::new(AtbashCipher::new()))
        }
        CipherArg::Playfair => {
            let key = key.context("playfair needs --key SEED")?;
            Ok(Box::new(PlayfairCipher::new(key)))
        }
    }
}

fn cmd_analyze(message: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let text = resolve_text(message, input)?;
    let heuristics: [&dyn Heuristic; 4] = [
        &LetterFrequencyHeuristic,
        &DictionaryHeuristic,
        &GraphemeHeuristic::new(),
        &NgramHeuristic::new(3),
    ];
    println!("Analyzing: {text:?}");
    for heuristic in heuristics {
        let evaluation = heuristic.analyze(&text);
        println!(
            "{:<26} Score: {:.3} - {}",
            format!("{}:", heuristic.name()),
            evaluation.score(),
            evaluation.summary()
        );
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let pangram = "the quick brown fox jumps over thirteen lazy dogs...";
    println!("Caesar cipher, shift 7:");
    let caesar = CaesarCipher::new(7);
    let encrypted = caesar.encrypt(pangram);
    println!("  Plaintext: {pangram}");
    println!("  Encrypted: {encrypted}");
    println!("  Decrypted: {}", caesar.decrypt(&encrypted));
    println!();

    println!("Vigenère cipher, key 'key':");
    let vigenere = VigenereCipher::new("key");
    let encrypted = vigenere.encrypt("hello world");
    println!("  Plaintext: hello world");
    println!("  Encrypted: {encrypted}");
    println!("  Decrypted: {}", vigenere.decrypt(&encrypted));
    println!();

    println!("Atbash cipher:");
    let atbash = AtbashCipher::new();
    let encrypted = atbash.encrypt("hello world");
    println!("  Encrypted: {encrypted}");
    println!("  Decrypted: {}", atbash.decrypt(&encrypted));
    println!();

    println!("Playfair cipher, key 'cipher':");
    let playfair = PlayfairCipher::new("cipher");
    let encrypted = playfair.encrypt("the quick brown fox");
    println!("  Encrypted: {encrypted}");
    println!("  Decrypted: {}", playfair.decrypt(&encrypted));
    println!();

    println!("Full alphabet under Caesar shift 1:");
    let caesar = CaesarCipher::new(1);
    let encrypted = caesar.encrypt(alphabet::ALPHABET);
    println!("  Original:  {}", alphabet::ALPHABET);
    println!("  Encrypted: {encrypted}");
    println!(
        "  Match after decrypt: {}",
        caesar.decrypt(&encrypted) == alphabet::ALPHABET
    );
    Ok(())
}

fn resolve_text(message: Option<String>, input: Option<PathBuf>) -> Result<String> {
    match (message, input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading text from {}", path.display())),
        (Some(_), Some(_)) => bail!("Provide either --message or --input, not both."),
        (None, None) => bail!("Provide --message TEXT or --input FILE."),
    }
}
