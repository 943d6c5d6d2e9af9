use clap::{Parser, ValueEnum};

use classical_ciphers::{Alphabet, Cipher, IntSquare};

/// Command-line arguments for the classical cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key for the selected algorithm (integer, digit string, keyword,
    /// two space-delimited keywords, or whitespace-separated square)
    #[arg(short, long, help = "Key for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Cipher algorithm to apply
    #[arg(short, long, help = "Cipher algorithm")]
    algorithm: Algorithm,

    /// Alphabet profile
    #[arg(long, default_value = "latin", help = "Alphabet profile")]
    alphabet: AlphabetChoice,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

#[derive(Clone, Debug, ValueEnum)]
enum Algorithm {
    Caesar,
    Vigenere,
    Gronsfeld,
    Polybius,
    Scytale,
    TableTransposition,
    DoubleTransposition,
    MagicSquare,
    Wheatstone,
}

#[derive(Clone, Debug, ValueEnum)]
enum AlphabetChoice {
    Russian,
    Latin,
}

/// Main entry point for the classical cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    let alphabet = match cli.alphabet {
        AlphabetChoice::Russian => Alphabet::russian(),
        AlphabetChoice::Latin => Alphabet::latin(),
    };
    let cipher = Cipher::new(alphabet);

    let encrypting = matches!(cli.mode, OperationMode::Encrypt);
    println!(
        "{} with {:?}, key: {}",
        if encrypting { "Encrypting" } else { "Decrypting" },
        cli.algorithm,
        cli.key
    );

    let result = apply(&cipher, &cli.algorithm, encrypting, &content, &cli.key)
        .expect("Cipher operation failed");

    // Write result to output file
    std::fs::write(&cli.output, result)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}

/// Dispatches one encrypt/decrypt call for the selected algorithm.
fn apply(
    cipher: &Cipher,
    algorithm: &Algorithm,
    encrypting: bool,
    text: &str,
    key: &str,
) -> classical_ciphers::Result<String> {
    match algorithm {
        Algorithm::Caesar => {
            let shift: i64 = key.trim().parse().expect("Caesar key must be an integer");
            Ok(if encrypting {
                cipher.encrypt_caesar(text, shift)
            } else {
                cipher.decrypt_caesar(text, shift)
            })
        }
        Algorithm::Vigenere => {
            if encrypting {
                cipher.encrypt_vigenere(text, key)
            } else {
                cipher.decrypt_vigenere(text, key)
            }
        }
        Algorithm::Gronsfeld => {
            if encrypting {
                cipher.encrypt_gronsfeld(text, key.trim())
            } else {
                cipher.decrypt_gronsfeld(text, key.trim())
            }
        }
        Algorithm::Polybius => {
            if encrypting {
                cipher.encrypt_polybius(text, key)
            } else {
                cipher.decrypt_polybius(text, key)
            }
        }
        Algorithm::Scytale => {
            let rails: usize = key.trim().parse().expect("Scytale key must be a rail count");
            if encrypting {
                cipher.encrypt_scytale(text, rails)
            } else {
                cipher.decrypt_scytale(text, rails)
            }
        }
        Algorithm::TableTransposition => {
            if encrypting {
                cipher.encrypt_table_transposition(text, key.trim())
            } else {
                cipher.decrypt_table_transposition(text, key.trim())
            }
        }
        Algorithm::DoubleTransposition => {
            if encrypting {
                cipher.encrypt_double_transposition(text, key)
            } else {
                cipher.decrypt_double_transposition(text, key)
            }
        }
        Algorithm::MagicSquare => {
            let square = IntSquare::parse(key)?;
            if encrypting {
                cipher.encrypt_magic_square(text, &square)
            } else {
                cipher.decrypt_magic_square(text, &square)
            }
        }
        Algorithm::Wheatstone => {
            if encrypting {
                cipher.encrypt_wheatstone(text, key)
            } else {
                cipher.decrypt_wheatstone(text, key)
            }
        }
    }
}
