use astgraft::errors::{AstError, AstResult};
use astgraft::frontend::{Token, TokenKind, TokenValue};

#[test]
fn test_literal_tokens_render_their_value() -> AstResult<()> {
    assert_eq!(Token::int(20).render(), "20");
    assert_eq!(Token::float(1.5).render(), "1.5");
    assert_eq!(Token::double(2.0).render(), "2.0");
    assert_eq!(Token::char('c').render(), "'c'");
    assert_eq!(Token::string("hi").render(), "\"hi\"");
    assert_eq!(Token::ident("count")?.render(), "count");
    assert_eq!(Token::type_name("int")?.render(), "int");
    Ok(())
}

#[test]
fn test_symbol_tokens_render_their_spelling() -> AstResult<()> {
    assert_eq!(Token::symbol(TokenKind::Minus)?.render(), "-");
    assert_eq!(Token::symbol(TokenKind::Le)?.render(), "<=");
    assert_eq!(Token::symbol(TokenKind::While)?.render(), "while");
    assert_eq!(Token::symbol(TokenKind::EndMarker)?.render(), "ENDMARKER");
    Ok(())
}

#[test]
fn test_operator_may_carry_its_own_spelling() -> AstResult<()> {
    let minus = Token::new(TokenKind::Minus, Some(TokenValue::Char('-')))?;
    assert_eq!(minus.render(), "-");
    assert_eq!(minus.value(), Some(&TokenValue::Char('-')));

    let le = Token::new(TokenKind::Le, Some(TokenValue::Text("<=".to_string())))?;
    assert_eq!(le.to_string(), "<=");
    Ok(())
}

#[test]
fn test_mismatched_literal_is_rejected() {
    let wrong_case = Token::new(TokenKind::Int, Some(TokenValue::Char('x')));
    assert!(matches!(
        wrong_case,
        Err(AstError::InvalidToken { kind: TokenKind::Int, .. })
    ));

    let missing = Token::new(TokenKind::Double, None);
    assert!(matches!(missing, Err(AstError::InvalidToken { .. })));

    let wrong_spelling = Token::new(TokenKind::Minus, Some(TokenValue::Char('+')));
    assert!(matches!(wrong_spelling, Err(AstError::InvalidToken { .. })));

    let keyword_with_number = Token::new(TokenKind::If, Some(TokenValue::Int(1)));
    assert!(matches!(keyword_with_number, Err(AstError::InvalidToken { .. })));

    assert!(Token::ident("").is_err());
}

#[test]
fn test_kind_names() {
    assert_eq!(TokenKind::Minus.name(), "MINUS");
    assert_eq!(TokenKind::Ident.name(), "ID");
    assert_eq!(TokenKind::Inc.name(), "INCR");
    assert_eq!(TokenKind::Plus.to_string(), "PLUS");
    assert_eq!(TokenKind::Int.symbol(), None);
}

#[test]
fn test_kind_classification() {
    for kind in [TokenKind::Int, TokenKind::Float, TokenKind::Double] {
        assert!(kind.is_numeric());
        assert!(kind.is_operand());
        assert!(!kind.is_binary_operator());
    }
    assert!(TokenKind::Ident.is_operand());
    assert!(!TokenKind::Ident.is_numeric());
    assert!(TokenKind::Plus.is_binary_operator());
    assert!(TokenKind::Lt.is_binary_operator());
    assert!(TokenKind::Lt.is_relational());
    assert!(!TokenKind::Plus.is_relational());
    assert!(!TokenKind::Assign.is_binary_operator());
    assert!(!TokenKind::Return.is_operand());
}
