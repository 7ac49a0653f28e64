//! Process, timing and `sysconf` entry points. Always compiled.

use log::trace;

use crate::ctypes::{c_int, c_long, c_uint, pid_t, uid_t};
use crate::errno::Result;
use crate::platform;
use crate::process;
use crate::sysconf as sc;

use super::ret;

/// Sleep for `seconds`, returning the seconds left if woken early.
#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn sleep(seconds: c_uint) -> c_uint {
    trace!("sleep <= seconds: {}", seconds);
    process::sleep_on(platform::current(), seconds)
}

/// Sleep for `useconds` microseconds.
#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn usleep(useconds: c_uint) -> c_int {
    trace!("usleep <= useconds: {}", useconds);
    ret(
        "usleep",
        process::usleep_on(platform::current(), useconds).map(|()| 0),
    )
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn geteuid() -> uid_t {
    process::geteuid()
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn getpid() -> pid_t {
    process::getpid()
}

/// Query a system limit or capability.
///
/// Unknown names fail with `EINVAL`; known names without a determinate
/// value return `-1` and leave `errno` alone.
#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn sysconf(name: c_int) -> c_long {
    trace!("sysconf <= name: {} ({:?})", name, sc::name_of(name));
    let res: Result<c_long> = sc::query(name).map(|value| value.unwrap_or(-1));
    ret("sysconf", res)
}
