use logos::Logos;
use parse_display::Display;
use std::str;

/// Line token.
///
/// A single line is lexed on its own, so a header is only recognised when it is the one and only
/// token on its line.
#[derive(PartialEq, Eq, Debug, Logos, Display, Clone, Copy)]
#[logos(skip r"[ \t\f\r\n]+")] // whitespace
pub enum Token {
    /// A comment, running to the end of the line.
    #[regex(r"#[^\n]*")]
    #[display("comment")]
    Comment,
    /// A bracketed table header.
    #[regex(r"\[[^ \t\f\r\n]+\]")]
    #[display("table header")]
    Header,
    /// Any other run of non-whitespace.
    #[regex(r"[^ \t\f\r\n]+", priority = 0)]
    #[display("text")]
    Text,
}

#[cfg(test)]
mod tests {
    use super::Token;
    use logos::Logos;

    fn get_token(input: &str) -> Option<Result<Token, <Token as Logos>::Error>> {
        let mut lex = Token::lexer(input);
        lex.next()
    }

    fn get_tokens(input: &str) -> Result<Vec<(Token, &str)>, <Token as Logos>::Error> {
        Token::lexer(input)
            .spanned()
            .map(|(res, span)| res.map(|token| (token, &input[span])))
            .collect()
    }

    #[test]
    fn next() {
        assert_eq!(get_token("[test]"), Some(Ok(Token::Header)));
        assert_eq!(get_token("[\"test\"]"), Some(Ok(Token::Header)));
        assert_eq!(get_token("  [test]  "), Some(Ok(Token::Header)));
        assert_eq!(get_token("# comment"), Some(Ok(Token::Comment)));
        assert_eq!(get_token("   # k = 1"), Some(Ok(Token::Comment)));
        assert_eq!(get_token("#"), Some(Ok(Token::Comment)));
        assert_eq!(get_token("key"), Some(Ok(Token::Text)));
        assert_eq!(get_token("   "), None);
        assert_eq!(get_token(""), None);

        assert_eq!(get_token("[]"), Some(Ok(Token::Text)));
        assert_eq!(get_token("[test"), Some(Ok(Token::Text)));
        assert_eq!(get_token("[test]x"), Some(Ok(Token::Text)));
        assert_eq!(get_token("[a]]"), Some(Ok(Token::Header)));
    }

    #[test]
    fn tokenize() {
        assert_eq!(
            get_tokens("key = \"some value\" # not a comment"),
            Ok(vec![
                (Token::Text, "key"),
                (Token::Text, "="),
                (Token::Text, "\"some"),
                (Token::Text, "value\""),
                (Token::Comment, "# not a comment"),
            ])
        );
        assert_eq!(
            get_tokens("[a b]"),
            Ok(vec![(Token::Text, "[a"), (Token::Text, "b]")])
        );
        assert_eq!(
            get_tokens("[a] trailing"),
            Ok(vec![(Token::Header, "[a]"), (Token::Text, "trailing")])
        );
    }
}
