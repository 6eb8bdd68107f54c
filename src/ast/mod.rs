/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed expression and statement enums
/// - expressions: Node definitions for each expression kind
/// - statements: Node definitions for each statement kind
pub mod ast;
pub mod expressions;
pub mod statements;
