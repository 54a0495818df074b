use super::statements::{FunctionDecl, Stmt, VarDecl};

/// Root of the tree. Owns every declaration in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

/// Top-level item.
///
/// Bare statements are allowed at the top level, so they get their own
/// variant next to functions and variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Var(VarDecl),
    Statement(Stmt),
}

impl Program {
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Function(function) => Some(function),
            _ => None,
        })
    }

    pub fn find_function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions().find(|function| function.name == name)
    }
}
