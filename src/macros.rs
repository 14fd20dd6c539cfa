#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        $(name: $name:expr,)?
        pattern: $pat:literal
        $(, before: $before:expr)?
        $(, triggers: $triggers:expr)?
        , replace: $template:expr
        $(,)?
    ) => {{
        $crate::SubstitutionRule {
            id: $id,
            name: $crate::rule!(@name $id $(, $name)?),
            pattern: $crate::rule!(@pattern $pat $(, $before)?),
            replacer: $crate::Replacer::Template($template),
            triggers: { $crate::Triggers::empty() $(| $triggers)? },
        }
    }};
    (
        id: $id:expr,
        $(name: $name:expr,)?
        pattern: $pat:literal
        $(, before: $before:expr)?
        $(, triggers: $triggers:expr)?
        , compute: |$m:ident| $body:block
        $(,)?
    ) => {{
        $crate::SubstitutionRule {
            id: $id,
            name: $crate::rule!(@name $id $(, $name)?),
            pattern: $crate::rule!(@pattern $pat $(, $before)?),
            replacer: $crate::Replacer::Computed(|$m: &$crate::RuleMatch<'_>| -> Option<String> { $body }),
            triggers: { $crate::Triggers::empty() $(| $triggers)? },
        }
    }};
    (@name $id:expr, $name:expr) => {
        $name
    };
    (@name $id:expr) => {
        $crate::rules::default_name($id)
    };
    (@pattern $pat:literal, $before:expr) => {
        $crate::Pattern::new($crate::regex!($pat)).preceded_by($before)
    };
    (@pattern $pat:literal) => {
        $crate::Pattern::new($crate::regex!($pat))
    };
}
