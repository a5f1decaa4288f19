//! `.nfg` reader
//!
//! Accepts the two layouts of version 1 files:
//!
//! - outcome form: an outcome block `{ { "label" v1, v2 } ... }` followed by
//!   one outcome id per profile (`0` for none);
//! - payoff form: one payoff per player for every profile, in enumeration
//!   order, each profile getting its own unlabelled outcome.
//!
//! Strategies are given either as name lists per player or as bare counts.
//! Quoted strings take backslash escapes; numbers may be integers,
//! decimals or `p/q` fractions and are kept exact.

use crate::error::ReadError;
use crate::table::fill_profiles;
use nashpath_engine::NormalFormGame;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::io::Read;

/// Largest number of strategy profiles a file may declare.
pub const MAX_PROFILES: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Text(String),
    Number(BigRational),
    Open,
    Close,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("`{}`", w),
            Token::Text(s) => format!("string \"{}\"", s),
            Token::Number(n) => format!("number {}", n),
            Token::Open => "`{`".to_string(),
            Token::Close => "`}`".to_string(),
            Token::Comma => "`,`".to_string(),
        }
    }
}

/// Integer, decimal or `p/q`, kept exact.
pub fn parse_number(text: &str) -> Option<BigRational> {
    if let Some((numer, denom)) = text.split_once('/') {
        let numer: BigInt = numer.parse().ok()?;
        let denom: BigInt = denom.parse().ok()?;
        if denom.is_zero() {
            return None;
        }
        return Some(BigRational::new(numer, denom));
    }
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }
    let digits: BigInt = format!("{}{}", whole, fraction).parse().ok()?;
    let value = BigRational::new(digits, num_traits::pow(BigInt::from(10), fraction.len()));
    Some(if negative { -value } else { value })
}

fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ReadError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '{' | '}' | ',' => {
                chars.next();
                let token = match c {
                    '{' => Token::Open,
                    '}' => Token::Close,
                    _ => Token::Comma,
                };
                tokens.push((token, line));
            }
            '"' => {
                chars.next();
                let start = line;
                let mut text = String::new();
                loop {
                    match chars.next() {
                        None => return Err(ReadError::UnterminatedString { line: start }),
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => {
                                if escaped == '\n' {
                                    line += 1;
                                }
                                text.push(escaped);
                            }
                            None => return Err(ReadError::UnterminatedString { line: start }),
                        },
                        Some(ch) => {
                            if ch == '\n' {
                                line += 1;
                            }
                            text.push(ch);
                        }
                    }
                }
                tokens.push((Token::Text(text), start));
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if !(ch.is_ascii_alphanumeric() || ch == '_') {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push((Token::Word(word), line));
            }
            _ => {
                let mut raw = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || "{}\",".contains(ch) {
                        break;
                    }
                    raw.push(ch);
                    chars.next();
                }
                match parse_number(&raw) {
                    Some(value) => tokens.push((Token::Number(value), line)),
                    None => return Err(ReadError::BadNumber { line, text: raw }),
                }
            }
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |&(_, line)| line)
    }

    fn next(&mut self, expected: &'static str) -> Result<(Token, usize), ReadError> {
        let item = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ReadError::Truncated { expected })?;
        self.pos += 1;
        Ok(item)
    }

    fn unexpected(expected: &'static str, token: &Token, line: usize) -> ReadError {
        ReadError::Unexpected {
            line,
            expected,
            found: token.describe(),
        }
    }

    fn expect(&mut self, want: Token, expected: &'static str) -> Result<(), ReadError> {
        let (token, line) = self.next(expected)?;
        if token == want {
            Ok(())
        } else {
            Err(Self::unexpected(expected, &token, line))
        }
    }

    fn text(&mut self, expected: &'static str) -> Result<String, ReadError> {
        match self.next(expected)? {
            (Token::Text(s), _) => Ok(s),
            (token, line) => Err(Self::unexpected(expected, &token, line)),
        }
    }

    fn number(&mut self, expected: &'static str) -> Result<BigRational, ReadError> {
        while self.peek() == Some(&Token::Comma) {
            self.pos += 1;
        }
        match self.next(expected)? {
            (Token::Number(n), _) => Ok(n),
            (token, line) => Err(Self::unexpected(expected, &token, line)),
        }
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, ReadError> {
        let line = self.line();
        let value = self.number(expected)?;
        if value.is_integer() {
            if let Some(n) = value.numer().to_usize() {
                return Ok(n);
            }
        }
        Err(Self::unexpected(expected, &Token::Number(value), line))
    }

    /// `{ "a" "b" ... }`
    fn text_list(&mut self, expected: &'static str) -> Result<Vec<String>, ReadError> {
        self.expect(Token::Open, expected)?;
        let mut items = Vec::new();
        loop {
            match self.next(expected)? {
                (Token::Close, _) => return Ok(items),
                (Token::Text(s), _) => items.push(s),
                (token, line) => return Err(Self::unexpected(expected, &token, line)),
            }
        }
    }

    fn header(&mut self) -> Result<(), ReadError> {
        let (token, line) = self.next("NFG header")?;
        let version = self.next("format version")?;
        let field = self.next("number field")?;
        match (&token, &version.0, &field.0) {
            (Token::Word(magic), Token::Number(v), Token::Word(f))
                if magic == "NFG" && v == &BigRational::from_integer(BigInt::from(1)) && (f == "R" || f == "D") =>
            {
                Ok(())
            }
            _ => Err(ReadError::Header {
                line,
                found: format!("{} {} {}", token.describe(), version.0.describe(), field.0.describe()),
            }),
        }
    }

    fn game(&mut self) -> Result<NormalFormGame, ReadError> {
        self.header()?;
        let title = self.text("title")?;
        let players = self.text_list("player names")?;

        self.expect(Token::Open, "strategy block")?;
        let mut strategy_names = Vec::new();
        let mut dimensions = Vec::with_capacity(players.len());
        if self.peek() == Some(&Token::Open) {
            for _ in &players {
                let names = self.text_list("strategy names")?;
                dimensions.push(names.len());
                strategy_names.push(names);
            }
        } else {
            for _ in &players {
                dimensions.push(self.count("strategy count")?);
            }
        }
        self.expect(Token::Close, "end of strategy block")?;

        let comment = match self.peek() {
            Some(Token::Text(_)) => self.text("comment")?,
            _ => String::new(),
        };

        let profiles = dimensions
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .filter(|&p| p <= MAX_PROFILES);
        if profiles.is_none() {
            return Err(ReadError::TooLarge {
                dimensions,
                limit: MAX_PROFILES,
            });
        }

        let mut game = NormalFormGame::new(&dimensions);
        game.set_title(title);
        game.set_comment(comment);
        for (pl, name) in players.into_iter().enumerate() {
            game.set_player_name(pl, name);
        }
        for (pl, names) in strategy_names.into_iter().enumerate() {
            for (st, name) in names.into_iter().enumerate() {
                game.set_strategy_name(pl, st, name);
            }
        }

        if self.peek() == Some(&Token::Open) {
            self.outcome_table(&mut game)?;
        } else {
            self.payoff_list(&mut game)?;
        }
        if let Some((token, line)) = self.tokens.get(self.pos) {
            return Err(Self::unexpected("end of input", token, *line));
        }

        game.mark_clean();
        log::debug!(
            "read game \"{}\" with dimensions {:?} and {} outcomes",
            game.title(),
            game.dimensions(),
            game.num_outcomes()
        );
        Ok(game)
    }

    fn outcome_table(&mut self, game: &mut NormalFormGame) -> Result<(), ReadError> {
        self.expect(Token::Open, "outcome block")?;
        while self.peek() != Some(&Token::Close) {
            self.expect(Token::Open, "outcome")?;
            let label = self.text("outcome label")?;
            let handle = game.new_outcome();
            game.set_label(handle, label);
            for pl in 0..game.num_players() {
                let value = self.number("payoff")?;
                game.set_payoff(handle, pl, value);
            }
            self.expect(Token::Close, "end of outcome")?;
        }
        self.expect(Token::Close, "end of outcome block")?;

        for index in 0..game.num_profiles() {
            let line = self.line();
            let id = self.count("outcome id")?;
            let handle = match id {
                0 => None,
                id => Some(
                    game.outcome_by_id(id)
                        .ok_or(ReadError::UnknownOutcome { line, id })?,
                ),
            };
            game.set_outcome_at(index, handle);
        }
        Ok(())
    }

    fn payoff_list(&mut self, game: &mut NormalFormGame) -> Result<(), ReadError> {
        let mut values = Vec::with_capacity(game.num_profiles() * game.num_players());
        for _ in 0..game.num_profiles() * game.num_players() {
            values.push(self.number("payoff")?);
        }
        let mut values = values.into_iter();
        fill_profiles(game, |_, _| values.next().unwrap_or_else(BigRational::zero));
        Ok(())
    }
}

/// Parse a game from `.nfg` text.
pub fn parse_nfg(text: &str) -> Result<NormalFormGame, ReadError> {
    let mut parser = Parser {
        tokens: tokenize(text)?,
        pos: 0,
    };
    parser.game()
}

/// Read a whole `.nfg` stream.
pub fn read_nfg<R: Read>(mut input: R) -> Result<NormalFormGame, ReadError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_nfg(&text)
}
