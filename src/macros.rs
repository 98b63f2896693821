//! Macros over the default emitter
//!
//! The plain forms take any number of `Display` values and join them with
//! single spaces; the `f` forms take a format string.

#[macro_export]
macro_rules! mention {
    ($($word:expr),* $(,)?) => {
        $crate::mention($crate::Words(&[$(&$word as &dyn ::std::fmt::Display),*]))
    };
}

#[macro_export]
macro_rules! warn {
    ($($word:expr),* $(,)?) => {
        $crate::warn($crate::Words(&[$(&$word as &dyn ::std::fmt::Display),*]))
    };
}

#[macro_export]
macro_rules! babble {
    ($($word:expr),* $(,)?) => {
        $crate::babble($crate::Words(&[$(&$word as &dyn ::std::fmt::Display),*]))
    };
}

#[macro_export]
macro_rules! caution {
    ($($word:expr),* $(,)?) => {
        $crate::caution($crate::Words(&[$(&$word as &dyn ::std::fmt::Display),*]))
    };
}

#[macro_export]
macro_rules! mentionf {
    ($($arg:tt)*) => {
        $crate::mentionf(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::warnf(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! babblef {
    ($($arg:tt)*) => {
        $crate::babblef(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cautionf {
    ($($arg:tt)*) => {
        $crate::cautionf(::std::format_args!($($arg)*))
    };
}

/// Render the message and hand it to the default emitter's abort collaborator
#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => {
        $crate::dief(::std::format_args!($($arg)*))
    };
}
