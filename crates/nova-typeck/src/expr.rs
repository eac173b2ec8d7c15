use nova_types::{method_named, Type, TypeEnv, TypeError};

/// A read of a variable whose declared type was supplied by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub declared_type: Type,
}

impl Variable {
    pub fn new(name: impl Into<String>, declared_type: Type) -> Self {
        Self {
            name: name.into(),
            declared_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    /// Source text of the literal, e.g. `5` or `"hi"`.
    pub value: String,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assign {
    pub lhs: Variable,
    pub rhs: Box<Expr>,
}

/// `receiver.name(args...)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodCall {
    pub receiver: Box<Expr>,
    pub name: String,
    pub args: Vec<Expr>,
}

/// `new class(args...)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorCall {
    pub class: Type,
    pub args: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Variable(Variable),
    Literal(Literal),
    /// The `null` literal.
    Null,
    Assign(Assign),
    MethodCall(MethodCall),
    New(ConstructorCall),
}

impl Expr {
    pub fn variable(name: impl Into<String>, declared_type: Type) -> Self {
        Expr::Variable(Variable::new(name, declared_type))
    }

    pub fn literal(value: impl Into<String>, ty: Type) -> Self {
        Expr::Literal(Literal {
            value: value.into(),
            ty,
        })
    }

    pub fn null() -> Self {
        Expr::Null
    }

    pub fn assign(lhs: Variable, rhs: Expr) -> Self {
        Expr::Assign(Assign {
            lhs,
            rhs: Box::new(rhs),
        })
    }

    pub fn method_call(receiver: Expr, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::MethodCall(MethodCall {
            receiver: Box::new(receiver),
            name: name.into(),
            args,
        })
    }

    pub fn new_object(class: Type, args: Vec<Expr>) -> Self {
        Expr::New(ConstructorCall { class, args })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Variable(_) => "variable",
            Expr::Literal(_) => "literal",
            Expr::Null => "null",
            Expr::Assign(_) => "assignment",
            Expr::MethodCall(_) => "method call",
            Expr::New(_) => "constructor call",
        }
    }

    /// The compile-time type of this expression.
    ///
    /// Assumes the expression is well-typed; the only failure is a method call whose receiver
    /// has no method of that name, which [`Expr::check_types`] reports as well.
    pub fn static_type(&self, env: &dyn TypeEnv) -> Result<Type, TypeError> {
        match self {
            Expr::Variable(var) => Ok(var.declared_type),
            Expr::Literal(lit) => Ok(lit.ty),
            Expr::Null => Ok(Type::Null),
            Expr::Assign(assign) => Ok(assign.lhs.declared_type),
            Expr::MethodCall(call) => {
                let receiver = call.receiver.static_type(env)?;
                Ok(method_named(env, &receiver, &call.name)?.return_type)
            }
            Expr::New(new) => Ok(new.class),
        }
    }
}
