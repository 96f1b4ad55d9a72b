/// The operation performed by an AST node.
///
/// `IntLit` marks a leaf; the other variants are binary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AstOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    IntLit,
}

/// A node in the expression tree.
///
/// Operator nodes always have both children present and ignore `value`;
/// leaf nodes have both children absent and carry the literal in `value`.
/// Each node exclusively owns its children and is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AstNode {
    pub op: AstOp,
    pub left: Option<Box<AstNode>>,
    pub right: Option<Box<AstNode>>,
    pub value: i64,
}

impl AstNode {
    /// Makes a leaf node carrying an integer literal.
    pub fn leaf(value: i64) -> Self {
        AstNode {
            op: AstOp::IntLit,
            left: None,
            right: None,
            value,
        }
    }

    /// Makes an operator node owning both sub-trees.
    pub fn binary(op: AstOp, left: AstNode, right: AstNode) -> Self {
        AstNode {
            op,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            value: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.op == AstOp::IntLit
    }

    /// Number of integer literals in the tree.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }

        let left = self.left.as_ref().map_or(0, |n| n.leaf_count());
        let right = self.right.as_ref().map_or(0, |n| n.leaf_count());

        left + right
    }

    /// Number of operator nodes in the tree.
    pub fn operator_count(&self) -> usize {
        if self.is_leaf() {
            return 0;
        }

        let left = self.left.as_ref().map_or(0, |n| n.operator_count());
        let right = self.right.as_ref().map_or(0, |n| n.operator_count());

        1 + left + right
    }
}
