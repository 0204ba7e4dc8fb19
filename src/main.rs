use astgraft::ast::{builders, Expression, Node, Tree};
use astgraft::errors::{AstError, AstResult};
use astgraft::frontend::{Token, TokenKind, TokenValue};
use astgraft::semantic::{walk, ASTVisitor, DebugPrinter, NoopVisitor};
use astgraft::utils::config::PrinterConfig;
use clap::{Parser, ValueEnum};
use regex::Regex;
use std::time::Instant;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Grow an expression tree token by token and walk it with a visitor",
    long_about = "Grow an expression tree token by token and walk it with a visitor.\n\
                 Each word is one already-classified token: integers, floats with an\n\
                 'f' suffix, doubles, quoted chars and strings, identifiers and operator\n\
                 symbols.\n\
                 \n\
                 Example usage:\n\
                 astgraft 20 - 10 + 60                 # Print the expression\n\
                 astgraft 20 - 10 + 60 --return 60     # Also graft `return 60`\n\
                 astgraft a '*' b --visitor noop       # Walk without output\n\
                 astgraft 1 + 2 --verbose --timing     # Report stages"
)]
struct Cli {
    // Expression words, first one seeds the root
    #[arg(required = true)]
    words: Vec<String>,

    // Operand of a return statement grafted after the expression
    #[arg(long = "return", value_name = "WORD")]
    return_value: Option<String>,

    // Visitor used to walk the finished tree
    #[arg(long, value_enum, default_value_t = VisitorChoice::Debug)]
    visitor: VisitorChoice,

    // Spaces per nesting level in debug output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    // Omit the node kind prefix in debug output
    #[arg(long)]
    no_kinds: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show stage timing
    #[arg(short, long)]
    timing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VisitorChoice {
    Debug,
    Noop,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

/// Maps command-line words to tokens. One word is one token.
struct WordClassifier {
    int: Regex,
    float: Regex,
    double: Regex,
    char_lit: Regex,
    string_lit: Regex,
    ident: Regex,
}

impl WordClassifier {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            int: Regex::new(r"^[0-9]+$")?,
            float: Regex::new(r"^([0-9]+\.[0-9]*)[fF]$")?,
            double: Regex::new(r"^[0-9]+\.[0-9]*$")?,
            char_lit: Regex::new(r"^'(.)'$")?,
            string_lit: Regex::new(r#"^"(.*)"$"#)?,
            ident: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
        })
    }

    fn classify(&self, word: &str) -> AstResult<Token> {
        let invalid = |kind: TokenKind| {
            AstError::invalid_token(kind, format!("cannot read literal '{}'", word))
        };
        if self.int.is_match(word) {
            return word
                .parse::<i64>()
                .map(Token::int)
                .map_err(|_| invalid(TokenKind::Int));
        }
        if let Some(caps) = self.float.captures(word) {
            return caps[1]
                .parse::<f32>()
                .map(Token::float)
                .map_err(|_| invalid(TokenKind::Float));
        }
        if self.double.is_match(word) {
            return word
                .parse::<f64>()
                .map(Token::double)
                .map_err(|_| invalid(TokenKind::Double));
        }
        if let Some(caps) = self.char_lit.captures(word) {
            let c = caps[1].chars().next().ok_or_else(|| invalid(TokenKind::Char))?;
            return Ok(Token::char(c));
        }
        if let Some(caps) = self.string_lit.captures(word) {
            return Ok(Token::string(&caps[1]));
        }
        if let Some(kind) = symbol_kind(word) {
            return Token::new(kind, Some(TokenValue::Text(word.to_string())));
        }
        if self.ident.is_match(word) {
            return Token::ident(word);
        }
        Err(AstError::malformed_insertion(format!(
            "'{}' is not a recognised token",
            word
        )))
    }
}

fn symbol_kind(word: &str) -> Option<TokenKind> {
    const CANDIDATES: [TokenKind; 15] = [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Modulo,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::LShift,
        TokenKind::RShift,
        TokenKind::Lt,
        TokenKind::Le,
        TokenKind::Gt,
        TokenKind::Ge,
        TokenKind::Eq,
        TokenKind::Ne,
    ];
    CANDIDATES
        .into_iter()
        .find(|kind| kind.symbol() == Some(word))
}

fn build_expression(classifier: &WordClassifier, words: &[String]) -> AstResult<Expression> {
    let (first, rest) = words
        .split_first()
        .ok_or_else(|| AstError::malformed_insertion("no tokens given"))?;
    let mut expr = builders::new_expression(classifier.classify(first)?);
    for word in rest {
        builders::insert_token(&mut expr, classifier.classify(word)?)?;
    }
    Ok(expr)
}

fn build_tree(cli: &Cli, classifier: &WordClassifier) -> AstResult<Tree> {
    let mut tree = Tree::new();
    let expr = build_expression(classifier, &cli.words)?;
    let expr_id = tree.add(Node::Expression(expr));
    let mut root = builders::graft(&mut tree, None, expr_id)?;

    if let Some(word) = &cli.return_value {
        let value = builders::new_expression(classifier.classify(word)?);
        let ret_id = tree.add(builders::build_return(Some(value))?);
        root = builders::graft(&mut tree, Some(root), ret_id)?;
    }
    tree.set_root(root)?;
    Ok(tree)
}

fn run(cli: &Cli) -> AstResult<()> {
    let classifier = WordClassifier::new()
        .map_err(|e| AstError::malformed_insertion(format!("word patterns: {}", e)))?;

    let build_start = Instant::now();
    let tree = build_tree(cli, &classifier)?;
    let build_time = build_start.elapsed().as_secs_f64();
    if cli.verbose {
        println!("Built tree in {:.6}s", build_time);
        println!("  {} node(s) on the skeleton", tree.preorder().count());
    }

    let walk_start = Instant::now();
    let mut printer = DebugPrinter::with_config(
        PrinterConfig::default()
            .with_indent_width(cli.indent)
            .with_kinds(!cli.no_kinds),
    );
    let mut noop = NoopVisitor;
    let visitor: &mut dyn ASTVisitor = match cli.visitor {
        VisitorChoice::Debug => &mut printer,
        VisitorChoice::Noop => &mut noop,
    };
    walk(&tree, visitor);
    let walk_time = walk_start.elapsed().as_secs_f64();
    if let Some(err) = printer.error() {
        return Err(err.clone());
    }

    print!("{}", printer.output());
    if cli.verbose {
        println!("Walked tree with {:?} visitor", cli.visitor);
    }
    if cli.timing {
        println!("Build: {:.6}s  Walk: {:.6}s", build_time, walk_time);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        fatal(&e.to_string());
    }
}
