//! Logging shim. Forwards to `defmt` or `log` depending on the enabled
//! feature, and compiles to nothing when neither is enabled. `defmt` wins
//! when both are enabled. Test builds skip `defmt`: no global logger is
//! linked there.
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(all(feature = "log", any(test, not(feature = "defmt"))))]
            ::log::trace!($s $(, $x)*);
            #[cfg(not(any(feature = "log", all(feature = "defmt", not(test)))))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(all(feature = "log", any(test, not(feature = "defmt"))))]
            ::log::debug!($s $(, $x)*);
            #[cfg(not(any(feature = "log", all(feature = "defmt", not(test)))))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::info!($s $(, $x)*);
            #[cfg(all(feature = "log", any(test, not(feature = "defmt"))))]
            ::log::info!($s $(, $x)*);
            #[cfg(not(any(feature = "log", all(feature = "defmt", not(test)))))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(all(feature = "log", any(test, not(feature = "defmt"))))]
            ::log::warn!($s $(, $x)*);
            #[cfg(not(any(feature = "log", all(feature = "defmt", not(test)))))]
            let _ = ($( & $x ),*);
        }
    };
}
