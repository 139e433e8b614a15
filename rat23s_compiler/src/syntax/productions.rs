//! One procedure per Rat23S production
//!
//! `Cont` productions are right-recursive in the grammar. They run here as
//! loops that push the same labels, in the same order, as the recursion would.

use super::error::SyntaxResult;
use super::parser::{Mode, Outcome, Parser};
use super::sink::TraceSink;
use super::terminal::Terminal;

/// Production labels written to the trace
pub mod labels {
    pub const RAT23S: &str = "<Rat23S> -> <Opt Function Definitions> # <Opt Declaration List> # <Statement List Start>";

    pub const OPT_FUNCTION_DEFINITIONS: &str = "<Opt Function Definitions> -> <Function Definitions>";
    pub const OPT_FUNCTION_DEFINITIONS_EMPTY: &str = "<Opt Function Definitions> -> <Empty>";
    pub const FUNCTION_DEFINITIONS_START: &str = "<Function Definitions Start> -> <Function> <Function Definitions Cont>";
    pub const FUNCTION_DEFINITIONS_CONT: &str = "<Function Definitions Cont> -> <Function Definitions Start>";
    pub const FUNCTION_DEFINITIONS_CONT_EMPTY: &str = "<Function Definitions Cont> -> <Empty>";
    pub const FUNCTION: &str = "<Function> -> function <Identifier> ( <Opt Parameter List> ) <Opt Declaration List> <Body>";

    pub const OPT_PARAMETER_LIST: &str = "<Opt Parameter List> -> <Parameter List Start>";
    pub const OPT_PARAMETER_LIST_EMPTY: &str = "<Opt Parameter List> -> <Empty>";
    pub const PARAMETER_LIST_START: &str = "<Parameter List Start> -> <Parameter> <Parameter List Cont>";
    pub const PARAMETER_LIST_CONT: &str = "<Parameter List Cont> -> , <Parameter List Start>";
    pub const PARAMETER_LIST_CONT_EMPTY: &str = "<Parameter List Cont> -> <Empty>";
    pub const PARAMETER: &str = "<Parameter> -> <IDs Start> <Qualifier>";

    pub const QUALIFIER_INT: &str = "<Qualifier> -> int";
    pub const QUALIFIER_BOOL: &str = "<Qualifier> -> bool";
    pub const QUALIFIER_REAL: &str = "<Qualifier> -> real";
    pub const QUALIFIER_ANY: &str = "<Qualifier> -> int | bool | real";

    pub const BODY: &str = "<Body> -> { <Statement List> }";

    pub const OPT_DECLARATION_LIST: &str = "<Opt Declaration List> -> <Declaration List Start>";
    pub const OPT_DECLARATION_LIST_EMPTY: &str = "<Opt Declaration List> -> <Empty>";
    pub const DECLARATION_LIST_START: &str = "<Declaration List Start> -> <Declaration> ; <Declaration List Cont>";
    pub const DECLARATION_LIST_CONT: &str = "<Declaration List Cont> -> <Declaration List Start>";
    pub const DECLARATION_LIST_CONT_EMPTY: &str = "<Declaration List Cont> -> <Empty>";
    pub const DECLARATION: &str = "<Declaration> -> <Qualifier> <IDs Start>";

    pub const IDS_START: &str = "<IDs Start> -> <Identifier> <IDs Cont>";
    pub const IDS_CONT: &str = "<IDs Cont> -> , <IDs Start>";
    pub const IDS_CONT_EMPTY: &str = "<IDs Cont> -> <Empty>";

    pub const STATEMENT_LIST_START: &str = "<Statement List Start> -> <Statement> <Statement List Cont>";
    pub const STATEMENT_LIST_CONT: &str = "<Statement List Cont> -> <Statement List Start>";
    pub const STATEMENT_LIST_CONT_EMPTY: &str = "<Statement List Cont> -> <Empty>";

    pub const STATEMENT_COMPOUND: &str = "<Statement> -> <Compound>";
    pub const STATEMENT_ASSIGN: &str = "<Statement> -> <Assign>";
    pub const STATEMENT_IF: &str = "<Statement> -> <If Start>";
    pub const STATEMENT_RETURN: &str = "<Statement> -> <Return Start>";
    pub const STATEMENT_PRINT: &str = "<Statement> -> <Print>";
    pub const STATEMENT_SCAN: &str = "<Statement> -> <Scan>";
    pub const STATEMENT_WHILE: &str = "<Statement> -> <While>";
    pub const STATEMENT_ANY: &str = "<Statement> -> <Compound> | <Assign> | <If Start> | <Return Start> | <Print> | <Scan> | <While>";

    pub const COMPOUND: &str = "<Compound> -> { <Statement List Start> }";
    pub const ASSIGN: &str = "<Assign> -> <Identifier> = <Expression Start> ;";
    pub const IF_START: &str = "<If Start> -> if ( <Condition> ) <Statement> <If Cont>";
    pub const IF_CONT_ELSE: &str = "<If Cont> -> else <Statement> fi";
    pub const IF_CONT_FI: &str = "<If Cont> -> fi";
    pub const IF_CONT_ANY: &str = "<If Cont> -> fi | else <Statement> fi";
    pub const RETURN_START: &str = "<Return Start> -> return <Return Cont>";
    pub const RETURN_CONT_EXPRESSION: &str = "<Return Cont> -> <Expression Start> ;";
    pub const RETURN_CONT_EMPTY: &str = "<Return Cont> -> ;";
    pub const RETURN_CONT_ANY: &str = "<Return Cont> -> <Expression Start> ; | ;";
    pub const PRINT: &str = "<Print> -> put ( <Expression Start> ) ;";
    pub const SCAN: &str = "<Scan> -> get ( <IDs Start> ) ;";
    pub const WHILE: &str = "<While> -> while ( <Condition> ) <Statement> endwhile";

    pub const CONDITION: &str = "<Condition> -> <Expression Start> <Relop> <Expression Start>";
    pub const RELOP_EQUAL: &str = "<Relop> -> ==";
    pub const RELOP_NOT_EQUAL: &str = "<Relop> -> !=";
    pub const RELOP_GREATER: &str = "<Relop> -> >";
    pub const RELOP_LESS: &str = "<Relop> -> <";
    pub const RELOP_LESS_EQUAL: &str = "<Relop> -> <=";
    pub const RELOP_ARROW: &str = "<Relop> -> =>";
    pub const RELOP_ANY: &str = "<Relop> -> == | != | > | < | <= | =>";

    pub const EXPRESSION_START: &str = "<Expression Start> -> <Term Start> <Expression Cont>";
    pub const EXPRESSION_CONT_PLUS: &str = "<Expression Cont> -> + <Term Start> <Expression Cont>";
    pub const EXPRESSION_CONT_MINUS: &str = "<Expression Cont> -> - <Term Start> <Expression Cont>";
    pub const EXPRESSION_CONT_EMPTY: &str = "<Expression Cont> -> <Empty>";
    pub const TERM_START: &str = "<Term Start> -> <Factor> <Term Cont>";
    pub const TERM_CONT_TIMES: &str = "<Term Cont> -> * <Factor> <Term Cont>";
    pub const TERM_CONT_DIVIDE: &str = "<Term Cont> -> / <Factor> <Term Cont>";
    pub const TERM_CONT_EMPTY: &str = "<Term Cont> -> <Empty>";

    pub const FACTOR_NEGATE: &str = "<Factor> -> - <Primary>";
    pub const FACTOR_PRIMARY: &str = "<Factor> -> <Primary>";
    pub const FACTOR_ANY: &str = "<Factor> -> - <Primary> | <Primary>";

    pub const PRIMARY_IDENTIFIER: &str = "<Primary Start> -> <Identifier> <Primary Cont>";
    pub const PRIMARY_INTEGER: &str = "<Primary Start> -> <Integer>";
    pub const PRIMARY_PARENTHESIZED: &str = "<Primary Start> -> ( <Expression Start> )";
    pub const PRIMARY_REAL: &str = "<Primary Start> -> <Real>";
    pub const PRIMARY_TRUE: &str = "<Primary Start> -> true";
    pub const PRIMARY_FALSE: &str = "<Primary Start> -> false";
    pub const PRIMARY_ANY: &str = "<Primary Start> -> <Identifier> <Primary Cont> | <Integer> | ( <Expression Start> ) | <Real> | true | false";
    pub const PRIMARY_CONT_CALL: &str = "<Primary Cont> -> ( <IDs Start> )";
    pub const PRIMARY_CONT_EMPTY: &str = "<Primary Cont> -> <Empty>";
}

pub const EXPECTED_QUALIFIER: &str = "expected qualifier";
pub const EXPECTED_STATEMENT: &str = "expected statement";
pub const EXPECTED_IF_CONT: &str = "expected 'fi' or 'else'";
pub const EXPECTED_RETURN_CONT: &str = "expected expression or ';'";
pub const EXPECTED_RELOP: &str = "expected relational operator";
pub const EXPECTED_PRIMARY: &str =
    "expected primary (<identifier>, <integer>, <real>, (expression), true, or false)";

type Procedure<S> = fn(&mut Parser<S>, Mode) -> SyntaxResult<Outcome>;

const HASH: Terminal = Terminal::Separator("#");
const COMMA: Terminal = Terminal::Separator(",");
const SEMICOLON: Terminal = Terminal::Separator(";");
const OPEN_PAREN: Terminal = Terminal::Separator("(");
const CLOSE_PAREN: Terminal = Terminal::Separator(")");
const OPEN_BRACE: Terminal = Terminal::Separator("{");
const CLOSE_BRACE: Terminal = Terminal::Separator("}");

impl<S: TraceSink> Parser<S> {
    /// `<Rat23S>`
    pub(super) fn rat23s(&mut self) -> SyntaxResult<()> {
        self.push(labels::RAT23S);
        self.opt_function_definitions()?;
        self.check_symbol(HASH, Mode::Commit)?;
        self.opt_declaration_list()?;
        self.check_symbol(HASH, Mode::Commit)?;
        self.statement_list(Mode::Commit)?;
        self.check_symbol(Terminal::EndOfInput, Mode::Commit)?;
        Ok(())
    }

    // ========================================================================
    // SHARED SHAPES
    // ========================================================================

    /// `<X> -> <Y> | <Empty>`
    fn optional(
        &mut self,
        present: &'static str,
        empty: &'static str,
        item: Procedure<S>,
    ) -> SyntaxResult<()> {
        let mark = self.snapshot();
        self.push(present);
        if item(self, Mode::Probe)?.is_matched() {
            return Ok(());
        }
        self.restore(mark);
        self.push(empty);
        Ok(())
    }

    /// `<X Cont> -> <X Start> | <Empty>`
    fn repeat_tail(
        &mut self,
        more: &'static str,
        start: &'static str,
        empty: &'static str,
        item: Procedure<S>,
    ) -> SyntaxResult<()> {
        loop {
            let mark = self.snapshot();
            self.push(more);
            self.push(start);
            if item(self, Mode::Probe)?.is_failed() {
                self.restore(mark);
                self.push(empty);
                return Ok(());
            }
        }
    }

    /// `<X Cont> -> , <X Start> | <Empty>`
    fn comma_tail(
        &mut self,
        more: &'static str,
        start: &'static str,
        empty: &'static str,
        item: Procedure<S>,
    ) -> SyntaxResult<()> {
        loop {
            let mark = self.snapshot();
            self.push(more);
            if self.check_symbol(COMMA, Mode::Probe)?.is_failed() {
                self.restore(mark);
                self.push(empty);
                return Ok(());
            }
            self.push(start);
            item(self, Mode::Commit)?;
        }
    }

    /// First matching single-terminal alternative
    fn one_of(
        &mut self,
        mode: Mode,
        alternatives: &[(&'static str, Terminal)],
        combined: &'static str,
        message: &str,
    ) -> SyntaxResult<Outcome> {
        let mark = self.snapshot();
        for &(label, terminal) in alternatives {
            self.push(label);
            if self.check_symbol(terminal, Mode::Probe)?.is_matched() {
                return Ok(Outcome::Matched);
            }
            self.restore(mark);
        }
        self.no_alternative(mode, combined, message)
    }

    // ========================================================================
    // FUNCTIONS
    // ========================================================================

    fn opt_function_definitions(&mut self) -> SyntaxResult<()> {
        self.optional(
            labels::OPT_FUNCTION_DEFINITIONS,
            labels::OPT_FUNCTION_DEFINITIONS_EMPTY,
            Self::function_definitions,
        )
    }

    fn function_definitions(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::FUNCTION_DEFINITIONS_START);
        if self.function(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.repeat_tail(
            labels::FUNCTION_DEFINITIONS_CONT,
            labels::FUNCTION_DEFINITIONS_START,
            labels::FUNCTION_DEFINITIONS_CONT_EMPTY,
            Self::function,
        )?;
        Ok(Outcome::Matched)
    }

    fn function(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::FUNCTION);
        if self.check_symbol(Terminal::Keyword("function"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(Terminal::Identifier, Mode::Commit)?;
        self.check_symbol(OPEN_PAREN, Mode::Commit)?;
        self.opt_parameter_list()?;
        self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
        self.opt_declaration_list()?;
        self.body()?;
        Ok(Outcome::Matched)
    }

    fn opt_parameter_list(&mut self) -> SyntaxResult<()> {
        self.optional(
            labels::OPT_PARAMETER_LIST,
            labels::OPT_PARAMETER_LIST_EMPTY,
            Self::parameter_list,
        )
    }

    fn parameter_list(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::PARAMETER_LIST_START);
        if self.parameter(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.comma_tail(
            labels::PARAMETER_LIST_CONT,
            labels::PARAMETER_LIST_START,
            labels::PARAMETER_LIST_CONT_EMPTY,
            Self::parameter,
        )?;
        Ok(Outcome::Matched)
    }

    fn parameter(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::PARAMETER);
        if self.ids(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.qualifier(Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn qualifier(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.one_of(
            mode,
            &[
                (labels::QUALIFIER_INT, Terminal::Keyword("int")),
                (labels::QUALIFIER_BOOL, Terminal::Keyword("bool")),
                (labels::QUALIFIER_REAL, Terminal::Keyword("real")),
            ],
            labels::QUALIFIER_ANY,
            EXPECTED_QUALIFIER,
        )
    }

    fn body(&mut self) -> SyntaxResult<()> {
        self.push(labels::BODY);
        self.check_symbol(OPEN_BRACE, Mode::Commit)?;
        self.statement_list(Mode::Commit)?;
        self.check_symbol(CLOSE_BRACE, Mode::Commit)?;
        Ok(())
    }

    // ========================================================================
    // DECLARATIONS
    // ========================================================================

    fn opt_declaration_list(&mut self) -> SyntaxResult<()> {
        self.optional(
            labels::OPT_DECLARATION_LIST,
            labels::OPT_DECLARATION_LIST_EMPTY,
            Self::declaration_list,
        )
    }

    fn declaration_list(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::DECLARATION_LIST_START);
        if self.terminated_declaration(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.repeat_tail(
            labels::DECLARATION_LIST_CONT,
            labels::DECLARATION_LIST_START,
            labels::DECLARATION_LIST_CONT_EMPTY,
            Self::terminated_declaration,
        )?;
        Ok(Outcome::Matched)
    }

    /// `<Declaration> ;`
    fn terminated_declaration(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        if self.declaration(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(SEMICOLON, Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn declaration(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::DECLARATION);
        if self.qualifier(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.ids(Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn ids(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::IDS_START);
        if self.check_symbol(Terminal::Identifier, mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.comma_tail(
            labels::IDS_CONT,
            labels::IDS_START,
            labels::IDS_CONT_EMPTY,
            |parser, mode| parser.check_symbol(Terminal::Identifier, mode),
        )?;
        Ok(Outcome::Matched)
    }

    // ========================================================================
    // STATEMENTS
    // ========================================================================

    fn statement_list(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::STATEMENT_LIST_START);
        if self.statement(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.repeat_tail(
            labels::STATEMENT_LIST_CONT,
            labels::STATEMENT_LIST_START,
            labels::STATEMENT_LIST_CONT_EMPTY,
            Self::statement,
        )?;
        Ok(Outcome::Matched)
    }

    fn statement(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.descend()?;
        let outcome = self.statement_alternatives(mode);
        self.ascend();
        outcome
    }

    fn statement_alternatives(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        let alternatives: [(&'static str, Procedure<S>); 7] = [
            (labels::STATEMENT_COMPOUND, Self::compound),
            (labels::STATEMENT_ASSIGN, Self::assign),
            (labels::STATEMENT_IF, Self::if_statement),
            (labels::STATEMENT_RETURN, Self::return_statement),
            (labels::STATEMENT_PRINT, Self::print),
            (labels::STATEMENT_SCAN, Self::scan),
            (labels::STATEMENT_WHILE, Self::while_loop),
        ];

        let mark = self.snapshot();
        for (label, procedure) in alternatives {
            self.push(label);
            if procedure(self, Mode::Probe)?.is_matched() {
                return Ok(Outcome::Matched);
            }
            self.restore(mark);
        }
        self.no_alternative(mode, labels::STATEMENT_ANY, EXPECTED_STATEMENT)
    }

    fn compound(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::COMPOUND);
        if self.check_symbol(OPEN_BRACE, mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.statement_list(Mode::Commit)?;
        self.check_symbol(CLOSE_BRACE, Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn assign(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::ASSIGN);
        if self.check_symbol(Terminal::Identifier, mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(Terminal::Operator("="), Mode::Commit)?;
        self.expression(Mode::Commit)?;
        self.check_symbol(SEMICOLON, Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn if_statement(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::IF_START);
        if self.check_symbol(Terminal::Keyword("if"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(OPEN_PAREN, Mode::Commit)?;
        self.condition(Mode::Commit)?;
        self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
        self.statement(Mode::Commit)?;
        self.if_cont(Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn if_cont(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        let mark = self.snapshot();

        self.push(labels::IF_CONT_ELSE);
        if self.check_symbol(Terminal::Keyword("else"), Mode::Probe)?.is_matched() {
            self.statement(Mode::Commit)?;
            self.check_symbol(Terminal::Keyword("fi"), Mode::Commit)?;
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.push(labels::IF_CONT_FI);
        if self.check_symbol(Terminal::Keyword("fi"), Mode::Probe)?.is_matched() {
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.no_alternative(mode, labels::IF_CONT_ANY, EXPECTED_IF_CONT)
    }

    fn return_statement(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::RETURN_START);
        if self.check_symbol(Terminal::Keyword("return"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.return_cont(Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn return_cont(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        let mark = self.snapshot();

        self.push(labels::RETURN_CONT_EXPRESSION);
        if self.expression(Mode::Probe)?.is_matched() {
            self.check_symbol(SEMICOLON, Mode::Commit)?;
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.push(labels::RETURN_CONT_EMPTY);
        if self.check_symbol(SEMICOLON, Mode::Probe)?.is_matched() {
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.no_alternative(mode, labels::RETURN_CONT_ANY, EXPECTED_RETURN_CONT)
    }

    fn print(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::PRINT);
        if self.check_symbol(Terminal::Keyword("put"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(OPEN_PAREN, Mode::Commit)?;
        self.expression(Mode::Commit)?;
        self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
        self.check_symbol(SEMICOLON, Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn scan(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::SCAN);
        if self.check_symbol(Terminal::Keyword("get"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(OPEN_PAREN, Mode::Commit)?;
        self.ids(Mode::Commit)?;
        self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
        self.check_symbol(SEMICOLON, Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn while_loop(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::WHILE);
        if self.check_symbol(Terminal::Keyword("while"), mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.check_symbol(OPEN_PAREN, Mode::Commit)?;
        self.condition(Mode::Commit)?;
        self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
        self.statement(Mode::Commit)?;
        self.check_symbol(Terminal::Keyword("endwhile"), Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    // ========================================================================
    // EXPRESSIONS
    // ========================================================================

    fn condition(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::CONDITION);
        if self.expression(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.relop(Mode::Commit)?;
        self.expression(Mode::Commit)?;
        Ok(Outcome::Matched)
    }

    fn relop(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.one_of(
            mode,
            &[
                (labels::RELOP_EQUAL, Terminal::Operator("==")),
                (labels::RELOP_NOT_EQUAL, Terminal::Operator("!=")),
                (labels::RELOP_GREATER, Terminal::Operator(">")),
                (labels::RELOP_LESS, Terminal::Operator("<")),
                (labels::RELOP_LESS_EQUAL, Terminal::Operator("<=")),
                (labels::RELOP_ARROW, Terminal::Operator("=>")),
            ],
            labels::RELOP_ANY,
            EXPECTED_RELOP,
        )
    }

    fn expression(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::EXPRESSION_START);
        if self.term(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.binary_tail(
            [
                (labels::EXPRESSION_CONT_PLUS, Terminal::Operator("+")),
                (labels::EXPRESSION_CONT_MINUS, Terminal::Operator("-")),
            ],
            labels::EXPRESSION_CONT_EMPTY,
            Self::term,
        )?;
        Ok(Outcome::Matched)
    }

    fn term(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        self.push(labels::TERM_START);
        if self.factor(mode)?.is_failed() {
            return Ok(Outcome::Failed);
        }
        self.binary_tail(
            [
                (labels::TERM_CONT_TIMES, Terminal::Operator("*")),
                (labels::TERM_CONT_DIVIDE, Terminal::Operator("/")),
            ],
            labels::TERM_CONT_EMPTY,
            Self::factor,
        )?;
        Ok(Outcome::Matched)
    }

    /// `<X Cont> -> op <Y> <X Cont> | ... | <Empty>`
    fn binary_tail(
        &mut self,
        operators: [(&'static str, Terminal); 2],
        empty: &'static str,
        operand: Procedure<S>,
    ) -> SyntaxResult<()> {
        'tail: loop {
            let mark = self.snapshot();
            for (label, operator) in operators {
                self.push(label);
                if self.check_symbol(operator, Mode::Probe)?.is_matched() {
                    operand(self, Mode::Commit)?;
                    continue 'tail;
                }
                self.restore(mark);
            }
            self.push(empty);
            return Ok(());
        }
    }

    fn factor(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        let mark = self.snapshot();

        self.push(labels::FACTOR_NEGATE);
        if self.check_symbol(Terminal::Operator("-"), Mode::Probe)?.is_matched() {
            self.primary(Mode::Commit)?;
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.push(labels::FACTOR_PRIMARY);
        if self.primary(Mode::Probe)?.is_matched() {
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.no_alternative(mode, labels::FACTOR_ANY, EXPECTED_PRIMARY)
    }

    fn primary(&mut self, mode: Mode) -> SyntaxResult<Outcome> {
        let mark = self.snapshot();

        self.push(labels::PRIMARY_IDENTIFIER);
        if self.check_symbol(Terminal::Identifier, Mode::Probe)?.is_matched() {
            self.primary_cont()?;
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.push(labels::PRIMARY_INTEGER);
        if self.check_symbol(Terminal::Integer, Mode::Probe)?.is_matched() {
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.push(labels::PRIMARY_PARENTHESIZED);
        if self.check_symbol(OPEN_PAREN, Mode::Probe)?.is_matched() {
            self.descend()?;
            let nested = self.expression(Mode::Commit);
            self.ascend();
            nested?;
            self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
            return Ok(Outcome::Matched);
        }
        self.restore(mark);

        self.one_of(
            mode,
            &[
                (labels::PRIMARY_REAL, Terminal::Real),
                (labels::PRIMARY_TRUE, Terminal::Keyword("true")),
                (labels::PRIMARY_FALSE, Terminal::Keyword("false")),
            ],
            labels::PRIMARY_ANY,
            EXPECTED_PRIMARY,
        )
    }

    fn primary_cont(&mut self) -> SyntaxResult<()> {
        let mark = self.snapshot();
        self.push(labels::PRIMARY_CONT_CALL);
        if self.check_symbol(OPEN_PAREN, Mode::Probe)?.is_matched() {
            self.ids(Mode::Commit)?;
            self.check_symbol(CLOSE_PAREN, Mode::Commit)?;
            return Ok(());
        }
        self.restore(mark);
        self.push(labels::PRIMARY_CONT_EMPTY);
        Ok(())
    }
}
