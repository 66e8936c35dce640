//! Macros for ergonomic command construction.

/// Build a [`GcmdDef`](crate::builder::GcmdDef) declaratively.
///
/// The `when`, `ports` and `then` clauses are each optional but must appear
/// in that order.
///
/// # Example
///
/// ```
/// use gcmd::gcmd;
///
/// let def = gcmd!("acquire" when { lock: false } ports [req] then { lock: true, owner: true });
///
/// assert_eq!(def.name, "acquire");
/// assert_eq!(def.guard.get("lock"), Some(&false));
/// assert!(def.ports.contains("req"));
/// assert_eq!(def.actset.len(), 2);
/// ```
#[macro_export]
macro_rules! gcmd {
    (
        $name:literal
        $(when { $($gvar:ident : $gval:expr),* $(,)? })?
        $(ports [ $($port:ident),* $(,)? ])?
        $(then { $($avar:ident : $aval:expr),* $(,)? })?
    ) => {{
        #[allow(unused_mut)]
        let mut def = $crate::builder::GcmdDef::new($name);
        $($(def = def.when(stringify!($gvar), $gval);)*)?
        $($(def = def.port(stringify!($port));)*)?
        $($(def = def.then(stringify!($avar), $aval);)*)?
        def
    }};
}
