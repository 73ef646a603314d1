#[doc(hidden)]
macro_rules! import_hashbrown {
    ($($t:ident),*) => {
        #[cfg(feature = "hashbrown")]
        use hashbrown::{$($t),*,};
    }
}

#[doc(hidden)]
macro_rules! import_std {
    ($($t:ident),*) => {
        #[cfg(not(feature = "hashbrown"))]
        use std::collections::{$($t),*,};
    }
}

#[doc(hidden)]
macro_rules! cfg_std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
            $item
        )*
    }
}

// Diagnostics are compiled out unless the `tracing` feature is enabled.
#[doc(hidden)]
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }
}

#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }
}
