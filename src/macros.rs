#[cfg(feature = "html_trace_bt")]
extern crate backtrace;

/* Keeps the disabled trace macros usable in expression position without
 * tripping `unused` lints on their arguments.
 */
#[cfg(not(feature = "html_trace"))]
#[inline(always)]
pub fn nop() {}

#[cfg(feature = "html_trace_bt")]
#[macro_export]
#[doc(hidden)]
macro_rules! html_trace {
    ($fmt:expr) => {
         let bt = ::backtrace::Backtrace::new();
         ::log::trace!( concat!($fmt, " at {:?}"), bt );
    };
    ($fmt:expr, $( $args:expr ),*) => {
         let bt = ::backtrace::Backtrace::new();
         ::log::trace!( concat!($fmt, " at {:?}"), $( $args ),* , bt );
    };
}
#[cfg(all(feature = "html_trace", not(feature = "html_trace_bt")))]
#[macro_export]
#[doc(hidden)]
macro_rules! html_trace {
    ($fmt:expr) => {
         ::log::trace!( $fmt );
    };
    ($fmt:expr, $( $args:expr ),*) => {
         ::log::trace!( $fmt, $( $args ),* );
    };
}
#[cfg(not(feature = "html_trace"))]
#[macro_export]
#[doc(hidden)]
macro_rules! html_trace {
    ($fmt:expr) => { $crate::macros::nop(); };
    ($fmt:expr, $( $args:expr ),*) => { $crate::macros::nop(); $( let _ = &$args; )* };
}

#[cfg(feature = "html_trace")]
#[macro_export]
#[doc(hidden)]
macro_rules! html_trace_quiet {
    ($fmt:expr) => {
         ::log::debug!( $fmt );
    };
    ($fmt:expr, $( $args:expr ),*) => {
         ::log::debug!( $fmt, $( $args ),* );
    };
}

#[cfg(not(feature = "html_trace"))]
#[macro_export]
#[doc(hidden)]
macro_rules! html_trace_quiet {
    ($fmt:expr) => { $crate::macros::nop(); };
    ($fmt:expr, $( $args:expr ),*) => { $crate::macros::nop(); $( let _ = &$args; )* };
}
