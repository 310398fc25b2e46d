use winnow::ascii::line_ending;
use winnow::combinator::{alt, delimited, eof, opt, peek, preceded, repeat, separated, terminated};
use winnow::combinator::trace;
use winnow::error::{ContextError, StrContext};
use winnow::token::{take, take_till, take_while};
use winnow::Parser;

type CommitDetails<'a> = (
    &'a str,
    Vec<&'a str>,
    bool,
    &'a str,
    Option<&'a str>,
    Vec<(&'a str, &'a str, &'a str)>,
);

pub(crate) fn parse(i: &str) -> Result<CommitDetails<'_>, ContextError> {
    let mut i = i;
    let details = trace("message", message).parse_next(&mut i)?;
    debug_assert!(i.is_empty(), "{i:?} remaining");
    Ok(details)
}

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
// <newline>         ::= [<CR>], <LF>
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <parens>          ::= "(" | ")"
fn is_parens(c: char) -> bool {
    c == '(' || c == ')'
}

// /* Any non-newline whitespace: */
// <whitespace>      ::= <TAB> | <VT> | <FF> | <SP> | <NBSP> | <USP>
fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

// <message>         ::= <summary>, <newline>*, [<body>], <newline>*, <footer>*, <newline>*
fn message<'a>(i: &mut &'a str) -> winnow::Result<CommitDetails<'a>> {
    let (type_, scopes, bang, description) =
        terminated(trace("summary", summary), alt((line_ending, eof))).parse_next(i)?;

    let _: () = repeat(0.., line_ending).parse_next(i)?;

    let body = opt(trace("body", body)).parse_next(i)?;

    let _: () = repeat(0.., line_ending).parse_next(i)?;

    let footers: Vec<(&str, &str, &str)> =
        repeat(0.., trace("footer", footer)).parse_next(i)?;

    let _: () = repeat(0.., line_ending).parse_next(i)?;
    eof.parse_next(i)?;

    Ok((type_, scopes, bang.is_some(), description, body, footers))
}

// /* "!" should surface on the record as the breaking flag */
// <summary>         ::= <type>, [<scope-block>], ["!"], ": ", <text>
#[allow(clippy::type_complexity)]
fn summary<'a>(i: &mut &'a str) -> winnow::Result<(&'a str, Vec<&'a str>, Option<&'a str>, &'a str)> {
    (
        trace("type", type_),
        opt(trace("scopes", scopes)),
        opt("!"),
        preceded(": ", trace("description", text).context(StrContext::Label("description"))),
    )
        .map(|(type_, scopes, bang, description)| {
            (type_, scopes.unwrap_or_default(), bang, description)
        })
        .parse_next(i)
}

// <type>            ::= <any UTF8-octets except newline or parens or ":" or "!" or whitespace>+
pub(crate) fn type_<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    take_while(1.., |c: char| {
        !is_line_ending(c) && !is_parens(c) && c != ':' && c != '!' && !is_whitespace(c)
    })
    .context(StrContext::Label("type"))
    .parse_next(i)
}

// <scope-block>     ::= "(", <scope>, {",", <scope>}, ")"
fn scopes<'a>(i: &mut &'a str) -> winnow::Result<Vec<&'a str>> {
    delimited('(', separated(1.., trace("scope", scope), ','), ')').parse_next(i)
}

// <scope>           ::= <any UTF8-octets except newline or parens or ",">+
//
// Surrounding spaces are separator noise, not part of the token, and a
// token that trims down to nothing is no token at all.
pub(crate) fn scope<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    take_while(1.., |c: char| !is_line_ending(c) && !is_parens(c) && c != ',')
        .verify(|s: &str| !s.trim().is_empty())
        .map(str::trim)
        .context(StrContext::Label("scope"))
        .parse_next(i)
}

// <text>            ::= <any UTF8-octets except newline>+
fn text<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    take_till(1.., is_line_ending).parse_next(i)
}

// <body>            ::= <any non-footer line>+
//
// Consumed line by line, stopping right before the first line that opens a
// footer. The probe runs ahead of every candidate line so a footer always
// terminates the block, while colon-bearing prose stays body text.
fn body<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    if i.is_empty() {
        return Err(ContextError::new());
    }

    let mut offset = 0;
    for line in i.split_inclusive('\n') {
        if looks_like_footer(line) {
            break;
        }
        offset += line.chars().count();
    }
    if offset == 0 {
        return Err(ContextError::new());
    }

    take(offset).map(str::trim_end).parse_next(i)
}

// Non-consuming lookahead for the footer boundary: succeeds only when a key
// and its delimiter match exactly at the start of the line. Probes a copy of
// the cursor, so failure leaves nothing consumed.
fn looks_like_footer(line: &str) -> bool {
    let mut probe = line.trim_end();
    peek((footer_key, footer_delimiter))
        .parse_next(&mut probe)
        .is_ok()
}

// <footer>          ::= <footer-key>, <footer-delimiter>, <value>
fn footer<'a>(i: &mut &'a str) -> winnow::Result<(&'a str, &'a str, &'a str)> {
    (footer_key, footer_delimiter, value).parse_next(i)
}

// <footer-key>      ::= "BREAKING CHANGE"
//                    |  <any UTF8-octets except newline or ":" or whitespace>+
//
// "BREAKING-CHANGE" needs no special case; the second alternative covers it.
pub(crate) fn footer_key<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    alt((
        "BREAKING CHANGE",
        take_while(1.., |c: char| {
            !is_line_ending(c) && c != ':' && !is_whitespace(c)
        }),
    ))
    .parse_next(i)
}

// <footer-delimiter> ::= ": " | " #"
fn footer_delimiter<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    alt((": ", " #")).parse_next(i)
}

// <value>           ::= <any non-footer line>+
//
// The first line always belongs to the value; later lines are taken until
// the next footer opens or the input runs out.
fn value<'a>(i: &mut &'a str) -> winnow::Result<&'a str> {
    if i.is_empty() {
        return Err(ContextError::new());
    }

    let mut offset = 0;
    for (idx, line) in i.split_inclusive('\n').enumerate() {
        if 0 < idx && looks_like_footer(line) {
            break;
        }

        offset += line.chars().count();
    }

    take(offset).map(str::trim_end).parse_next(i)
}
