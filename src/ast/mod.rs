/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and top-level declarations
/// - expressions: Expression variants and operators
/// - statements: Statement variants, blocks, function and variable declarations
pub mod ast;
pub mod expressions;
pub mod statements;
