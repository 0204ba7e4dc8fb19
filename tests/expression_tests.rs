use astgraft::ast::{builders, AstNode, Expression};
use astgraft::errors::{AstError, AstResult};
use astgraft::frontend::{Token, TokenKind, TokenValue};

fn op(kind: TokenKind) -> AstResult<Token> {
    Token::symbol(kind)
}

fn grow(seed: Token, rest: Vec<Token>) -> AstResult<Expression> {
    let mut expr = builders::new_expression(seed);
    for tok in rest {
        builders::insert_token(&mut expr, tok)?;
    }
    Ok(expr)
}

#[test]
fn test_subtract_then_add() -> AstResult<()> {
    let minus = Token::new(TokenKind::Minus, Some(TokenValue::Char('-')))?;
    let plus = Token::new(TokenKind::Plus, Some(TokenValue::Char('+')))?;
    let expr = grow(
        Token::int(20),
        vec![minus, Token::int(10), plus, Token::int(60)],
    )?;

    assert_eq!(expr.render(), "20 - 10 + 60");
    assert!(expr.is_complete());
    assert_eq!(expr.len(), 5);
    assert_eq!(expr.depth(), 3);

    // Right-leaning: 20 - (10 + 60)
    assert_eq!(expr.token().map(Token::kind), Some(TokenKind::Minus));
    assert_eq!(expr.left().and_then(Expression::token), Some(&Token::int(20)));
    let right = expr.right().expect("right subtree");
    assert_eq!(right.token().map(Token::kind), Some(TokenKind::Plus));
    assert_eq!(right.left().and_then(Expression::token), Some(&Token::int(10)));
    assert_eq!(right.right().and_then(Expression::token), Some(&Token::int(60)));
    Ok(())
}

#[test]
fn test_in_order_tokens_match_insertion_order() -> AstResult<()> {
    let input = vec![
        Token::ident("a")?,
        op(TokenKind::Multiply)?,
        Token::ident("b")?,
        op(TokenKind::Minus)?,
        Token::ident("c")?,
        op(TokenKind::Divide)?,
        Token::int(4),
        op(TokenKind::Lt)?,
        Token::double(2.5),
    ];
    let mut rest = input.clone();
    let seed = rest.remove(0);
    let expr = grow(seed, rest)?;

    let tokens: Vec<Token> = expr.tokens().into_iter().cloned().collect();
    assert_eq!(tokens, input);
    assert_eq!(expr.render(), "a * b - c / 4 < 2.5");
    assert!(expr.is_complete());
    assert_eq!(expr.len(), input.len());
    Ok(())
}

#[test]
fn test_single_leaf() {
    let expr = builders::new_expression(Token::int(7));
    assert!(expr.is_leaf());
    assert!(expr.is_complete());
    assert_eq!(expr.render(), "7");
    assert_eq!(expr.depth(), 1);
}

#[test]
fn test_unseeded_expression_rejects_insertion() -> AstResult<()> {
    let mut expr = Expression::empty();
    let err = builders::insert_token(&mut expr, Token::int(1)).unwrap_err();
    assert!(matches!(err, AstError::MalformedInsertion { .. }));

    let err = builders::insert_token(&mut expr, op(TokenKind::Plus)?).unwrap_err();
    assert!(matches!(err, AstError::MalformedInsertion { .. }));

    assert!(expr.is_empty());
    assert_eq!(expr.len(), 0);
    assert_eq!(expr.render(), "");
    Ok(())
}

#[test]
fn test_operand_after_operand_is_rejected() -> AstResult<()> {
    let mut expr = grow(Token::int(1), vec![op(TokenKind::Plus)?, Token::int(2)])?;
    let before = expr.clone();

    let err = expr.insert_token(Token::int(3)).unwrap_err();
    assert!(matches!(err, AstError::MalformedInsertion { .. }));
    assert_eq!(expr, before);
    Ok(())
}

#[test]
fn test_operator_after_operator_is_rejected() -> AstResult<()> {
    let mut expr = grow(Token::int(1), vec![op(TokenKind::Plus)?])?;
    assert_eq!(expr.render(), "1 +");
    assert!(!expr.is_complete());

    let err = expr.insert_token(op(TokenKind::Multiply)?).unwrap_err();
    assert!(matches!(err, AstError::MalformedInsertion { .. }));
    assert_eq!(expr.render(), "1 +");
    Ok(())
}

#[test]
fn test_non_expression_tokens_are_rejected() -> AstResult<()> {
    let mut expr = builders::new_expression(Token::ident("x")?);
    for kind in [TokenKind::Assign, TokenKind::Semicolon, TokenKind::Return] {
        let err = expr.insert_token(op(kind)?).unwrap_err();
        assert!(matches!(err, AstError::MalformedInsertion { .. }));
    }
    assert!(expr.is_leaf());
    Ok(())
}

#[test]
fn test_operand_cannot_precede_operator_seed() -> AstResult<()> {
    let mut expr = builders::new_expression(op(TokenKind::Plus)?);
    let before = expr.clone();

    let err = builders::insert_token(&mut expr, Token::int(1)).unwrap_err();
    assert!(matches!(err, AstError::MalformedInsertion { .. }));
    assert_eq!(expr, before);
    assert_eq!(expr.render(), "+");
    Ok(())
}
