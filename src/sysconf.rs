//! System Configuration Queries
//!
//! The `_SC_*` name table of `unistd.h` and the `sysconf` answers.
//!
//! # Name Table
//! Values follow the Linux numbering, gaps included. Two names are
//! aliases of another spelling:
//! - `_SC_PAGE_SIZE` and `_SC_PAGESIZE` are both 30
//! - `_SC_UIO_MAXIOV` and `_SC_IOV_MAX` are both 60

use crate::config::{self, limits};
use crate::ctypes::{c_int, c_long};
use crate::errno::{Errno, Result};
use crate::mm;

pub const _SC_ARG_MAX: c_int = 0;
pub const _SC_CHILD_MAX: c_int = 1;
pub const _SC_CLK_TCK: c_int = 2;
pub const _SC_NGROUPS_MAX: c_int = 3;
pub const _SC_OPEN_MAX: c_int = 4;
pub const _SC_STREAM_MAX: c_int = 5;
pub const _SC_TZNAME_MAX: c_int = 6;
pub const _SC_JOB_CONTROL: c_int = 7;
pub const _SC_SAVED_IDS: c_int = 8;
pub const _SC_REALTIME_SIGNALS: c_int = 9;
pub const _SC_PRIORITY_SCHEDULING: c_int = 10;
pub const _SC_TIMERS: c_int = 11;
pub const _SC_ASYNCHRONOUS_IO: c_int = 12;
pub const _SC_PRIORITIZED_IO: c_int = 13;
pub const _SC_SYNCHRONIZED_IO: c_int = 14;
pub const _SC_FSYNC: c_int = 15;
pub const _SC_MAPPED_FILES: c_int = 16;
pub const _SC_MEMLOCK: c_int = 17;
pub const _SC_MEMLOCK_RANGE: c_int = 18;
pub const _SC_MEMORY_PROTECTION: c_int = 19;
pub const _SC_MESSAGE_PASSING: c_int = 20;
pub const _SC_SEMAPHORES: c_int = 21;
pub const _SC_SHARED_MEMORY_OBJECTS: c_int = 22;
pub const _SC_AIO_LISTIO_MAX: c_int = 23;
pub const _SC_AIO_MAX: c_int = 24;
pub const _SC_AIO_PRIO_DELTA_MAX: c_int = 25;
pub const _SC_DELAYTIMER_MAX: c_int = 26;
pub const _SC_MQ_OPEN_MAX: c_int = 27;
pub const _SC_MQ_PRIO_MAX: c_int = 28;
pub const _SC_VERSION: c_int = 29;
pub const _SC_PAGE_SIZE: c_int = 30;
pub const _SC_PAGESIZE: c_int = 30;
pub const _SC_RTSIG_MAX: c_int = 31;
pub const _SC_SEM_NSEMS_MAX: c_int = 32;
pub const _SC_SEM_VALUE_MAX: c_int = 33;
pub const _SC_SIGQUEUE_MAX: c_int = 34;
pub const _SC_TIMER_MAX: c_int = 35;
pub const _SC_BC_BASE_MAX: c_int = 36;
pub const _SC_BC_DIM_MAX: c_int = 37;
pub const _SC_BC_SCALE_MAX: c_int = 38;
pub const _SC_BC_STRING_MAX: c_int = 39;
pub const _SC_COLL_WEIGHTS_MAX: c_int = 40;
pub const _SC_EXPR_NEST_MAX: c_int = 42;
pub const _SC_LINE_MAX: c_int = 43;
pub const _SC_RE_DUP_MAX: c_int = 44;
pub const _SC_2_VERSION: c_int = 46;
pub const _SC_2_C_BIND: c_int = 47;
pub const _SC_2_C_DEV: c_int = 48;
pub const _SC_2_FORT_DEV: c_int = 49;
pub const _SC_2_FORT_RUN: c_int = 50;
pub const _SC_2_SW_DEV: c_int = 51;
pub const _SC_2_LOCALEDEF: c_int = 52;
pub const _SC_UIO_MAXIOV: c_int = 60;
pub const _SC_IOV_MAX: c_int = 60;
pub const _SC_THREADS: c_int = 67;
pub const _SC_THREAD_SAFE_FUNCTIONS: c_int = 68;
pub const _SC_GETGR_R_SIZE_MAX: c_int = 69;
pub const _SC_GETPW_R_SIZE_MAX: c_int = 70;
pub const _SC_LOGIN_NAME_MAX: c_int = 71;
pub const _SC_TTY_NAME_MAX: c_int = 72;
pub const _SC_THREAD_DESTRUCTOR_ITERATIONS: c_int = 73;
pub const _SC_THREAD_KEYS_MAX: c_int = 74;
pub const _SC_THREAD_STACK_MIN: c_int = 75;
pub const _SC_THREAD_THREADS_MAX: c_int = 76;
pub const _SC_THREAD_ATTR_STACKADDR: c_int = 77;
pub const _SC_THREAD_ATTR_STACKSIZE: c_int = 78;
pub const _SC_THREAD_PRIORITY_SCHEDULING: c_int = 79;
pub const _SC_THREAD_PRIO_INHERIT: c_int = 80;
pub const _SC_THREAD_PRIO_PROTECT: c_int = 81;
pub const _SC_THREAD_PROCESS_SHARED: c_int = 82;
pub const _SC_NPROCESSORS_CONF: c_int = 83;
pub const _SC_NPROCESSORS_ONLN: c_int = 84;
pub const _SC_PHYS_PAGES: c_int = 85;
pub const _SC_AVPHYS_PAGES: c_int = 86;
pub const _SC_ATEXIT_MAX: c_int = 87;
pub const _SC_PASS_MAX: c_int = 88;
pub const _SC_XOPEN_VERSION: c_int = 89;
pub const _SC_XOPEN_XCU_VERSION: c_int = 90;
pub const _SC_XOPEN_UNIX: c_int = 91;
pub const _SC_XOPEN_CRYPT: c_int = 92;
pub const _SC_XOPEN_ENH_I18N: c_int = 93;
pub const _SC_XOPEN_SHM: c_int = 94;
pub const _SC_2_CHAR_TERM: c_int = 95;
pub const _SC_2_UPE: c_int = 97;
pub const _SC_XOPEN_XPG2: c_int = 98;
pub const _SC_XOPEN_XPG3: c_int = 99;
pub const _SC_XOPEN_XPG4: c_int = 100;
pub const _SC_NZERO: c_int = 109;
pub const _SC_XBS5_ILP32_OFF32: c_int = 125;
pub const _SC_XBS5_ILP32_OFFBIG: c_int = 126;
pub const _SC_XBS5_LP64_OFF64: c_int = 127;
pub const _SC_XBS5_LPBIG_OFFBIG: c_int = 128;
pub const _SC_XOPEN_LEGACY: c_int = 129;
pub const _SC_XOPEN_REALTIME: c_int = 130;
pub const _SC_XOPEN_REALTIME_THREADS: c_int = 131;
pub const _SC_ADVISORY_INFO: c_int = 132;
pub const _SC_BARRIERS: c_int = 133;
pub const _SC_CLOCK_SELECTION: c_int = 137;
pub const _SC_CPUTIME: c_int = 138;
pub const _SC_THREAD_CPUTIME: c_int = 139;
pub const _SC_MONOTONIC_CLOCK: c_int = 149;
pub const _SC_READER_WRITER_LOCKS: c_int = 153;
pub const _SC_SPIN_LOCKS: c_int = 154;
pub const _SC_REGEXP: c_int = 155;
pub const _SC_SHELL: c_int = 157;
pub const _SC_SPAWN: c_int = 159;
pub const _SC_SPORADIC_SERVER: c_int = 160;
pub const _SC_THREAD_SPORADIC_SERVER: c_int = 161;
pub const _SC_TIMEOUTS: c_int = 164;
pub const _SC_TYPED_MEMORY_OBJECTS: c_int = 165;
pub const _SC_2_PBS: c_int = 168;
pub const _SC_2_PBS_ACCOUNTING: c_int = 169;
pub const _SC_2_PBS_LOCATE: c_int = 170;
pub const _SC_2_PBS_MESSAGE: c_int = 171;
pub const _SC_2_PBS_TRACK: c_int = 172;
pub const _SC_SYMLOOP_MAX: c_int = 173;
pub const _SC_STREAMS: c_int = 174;
pub const _SC_2_PBS_CHECKPOINT: c_int = 175;
pub const _SC_V6_ILP32_OFF32: c_int = 176;
pub const _SC_V6_ILP32_OFFBIG: c_int = 177;
pub const _SC_V6_LP64_OFF64: c_int = 178;
pub const _SC_V6_LPBIG_OFFBIG: c_int = 179;
pub const _SC_HOST_NAME_MAX: c_int = 180;
pub const _SC_TRACE: c_int = 181;
pub const _SC_TRACE_EVENT_FILTER: c_int = 182;
pub const _SC_TRACE_INHERIT: c_int = 183;
pub const _SC_TRACE_LOG: c_int = 184;
pub const _SC_IPV6: c_int = 235;
pub const _SC_RAW_SOCKETS: c_int = 236;
pub const _SC_V7_ILP32_OFF32: c_int = 237;
pub const _SC_V7_ILP32_OFFBIG: c_int = 238;
pub const _SC_V7_LP64_OFF64: c_int = 239;
pub const _SC_V7_LPBIG_OFFBIG: c_int = 240;
pub const _SC_SS_REPL_MAX: c_int = 241;
pub const _SC_TRACE_EVENT_NAME_MAX: c_int = 242;
pub const _SC_TRACE_NAME_MAX: c_int = 243;
pub const _SC_TRACE_SYS_MAX: c_int = 244;
pub const _SC_TRACE_USER_EVENT_MAX: c_int = 245;
pub const _SC_XOPEN_STREAMS: c_int = 246;
pub const _SC_THREAD_ROBUST_PRIO_INHERIT: c_int = 247;
pub const _SC_THREAD_ROBUST_PRIO_PROTECT: c_int = 248;

/// Every `_SC_*` spelling with its value, in header order.
pub const SYSCONF_NAMES: &[(&str, c_int)] = &[
    ("_SC_ARG_MAX", _SC_ARG_MAX),
    ("_SC_CHILD_MAX", _SC_CHILD_MAX),
    ("_SC_CLK_TCK", _SC_CLK_TCK),
    ("_SC_NGROUPS_MAX", _SC_NGROUPS_MAX),
    ("_SC_OPEN_MAX", _SC_OPEN_MAX),
    ("_SC_STREAM_MAX", _SC_STREAM_MAX),
    ("_SC_TZNAME_MAX", _SC_TZNAME_MAX),
    ("_SC_JOB_CONTROL", _SC_JOB_CONTROL),
    ("_SC_SAVED_IDS", _SC_SAVED_IDS),
    ("_SC_REALTIME_SIGNALS", _SC_REALTIME_SIGNALS),
    ("_SC_PRIORITY_SCHEDULING", _SC_PRIORITY_SCHEDULING),
    ("_SC_TIMERS", _SC_TIMERS),
    ("_SC_ASYNCHRONOUS_IO", _SC_ASYNCHRONOUS_IO),
    ("_SC_PRIORITIZED_IO", _SC_PRIORITIZED_IO),
    ("_SC_SYNCHRONIZED_IO", _SC_SYNCHRONIZED_IO),
    ("_SC_FSYNC", _SC_FSYNC),
    ("_SC_MAPPED_FILES", _SC_MAPPED_FILES),
    ("_SC_MEMLOCK", _SC_MEMLOCK),
    ("_SC_MEMLOCK_RANGE", _SC_MEMLOCK_RANGE),
    ("_SC_MEMORY_PROTECTION", _SC_MEMORY_PROTECTION),
    ("_SC_MESSAGE_PASSING", _SC_MESSAGE_PASSING),
    ("_SC_SEMAPHORES", _SC_SEMAPHORES),
    ("_SC_SHARED_MEMORY_OBJECTS", _SC_SHARED_MEMORY_OBJECTS),
    ("_SC_AIO_LISTIO_MAX", _SC_AIO_LISTIO_MAX),
    ("_SC_AIO_MAX", _SC_AIO_MAX),
    ("_SC_AIO_PRIO_DELTA_MAX", _SC_AIO_PRIO_DELTA_MAX),
    ("_SC_DELAYTIMER_MAX", _SC_DELAYTIMER_MAX),
    ("_SC_MQ_OPEN_MAX", _SC_MQ_OPEN_MAX),
    ("_SC_MQ_PRIO_MAX", _SC_MQ_PRIO_MAX),
    ("_SC_VERSION", _SC_VERSION),
    ("_SC_PAGE_SIZE", _SC_PAGE_SIZE),
    ("_SC_PAGESIZE", _SC_PAGESIZE),
    ("_SC_RTSIG_MAX", _SC_RTSIG_MAX),
    ("_SC_SEM_NSEMS_MAX", _SC_SEM_NSEMS_MAX),
    ("_SC_SEM_VALUE_MAX", _SC_SEM_VALUE_MAX),
    ("_SC_SIGQUEUE_MAX", _SC_SIGQUEUE_MAX),
    ("_SC_TIMER_MAX", _SC_TIMER_MAX),
    ("_SC_BC_BASE_MAX", _SC_BC_BASE_MAX),
    ("_SC_BC_DIM_MAX", _SC_BC_DIM_MAX),
    ("_SC_BC_SCALE_MAX", _SC_BC_SCALE_MAX),
    ("_SC_BC_STRING_MAX", _SC_BC_STRING_MAX),
    ("_SC_COLL_WEIGHTS_MAX", _SC_COLL_WEIGHTS_MAX),
    ("_SC_EXPR_NEST_MAX", _SC_EXPR_NEST_MAX),
    ("_SC_LINE_MAX", _SC_LINE_MAX),
    ("_SC_RE_DUP_MAX", _SC_RE_DUP_MAX),
    ("_SC_2_VERSION", _SC_2_VERSION),
    ("_SC_2_C_BIND", _SC_2_C_BIND),
    ("_SC_2_C_DEV", _SC_2_C_DEV),
    ("_SC_2_FORT_DEV", _SC_2_FORT_DEV),
    ("_SC_2_FORT_RUN", _SC_2_FORT_RUN),
    ("_SC_2_SW_DEV", _SC_2_SW_DEV),
    ("_SC_2_LOCALEDEF", _SC_2_LOCALEDEF),
    ("_SC_UIO_MAXIOV", _SC_UIO_MAXIOV),
    ("_SC_IOV_MAX", _SC_IOV_MAX),
    ("_SC_THREADS", _SC_THREADS),
    ("_SC_THREAD_SAFE_FUNCTIONS", _SC_THREAD_SAFE_FUNCTIONS),
    ("_SC_GETGR_R_SIZE_MAX", _SC_GETGR_R_SIZE_MAX),
    ("_SC_GETPW_R_SIZE_MAX", _SC_GETPW_R_SIZE_MAX),
    ("_SC_LOGIN_NAME_MAX", _SC_LOGIN_NAME_MAX),
    ("_SC_TTY_NAME_MAX", _SC_TTY_NAME_MAX),
    ("_SC_THREAD_DESTRUCTOR_ITERATIONS", _SC_THREAD_DESTRUCTOR_ITERATIONS),
    ("_SC_THREAD_KEYS_MAX", _SC_THREAD_KEYS_MAX),
    ("_SC_THREAD_STACK_MIN", _SC_THREAD_STACK_MIN),
    ("_SC_THREAD_THREADS_MAX", _SC_THREAD_THREADS_MAX),
    ("_SC_THREAD_ATTR_STACKADDR", _SC_THREAD_ATTR_STACKADDR),
    ("_SC_THREAD_ATTR_STACKSIZE", _SC_THREAD_ATTR_STACKSIZE),
    ("_SC_THREAD_PRIORITY_SCHEDULING", _SC_THREAD_PRIORITY_SCHEDULING),
    ("_SC_THREAD_PRIO_INHERIT", _SC_THREAD_PRIO_INHERIT),
    ("_SC_THREAD_PRIO_PROTECT", _SC_THREAD_PRIO_PROTECT),
    ("_SC_THREAD_PROCESS_SHARED", _SC_THREAD_PROCESS_SHARED),
    ("_SC_NPROCESSORS_CONF", _SC_NPROCESSORS_CONF),
    ("_SC_NPROCESSORS_ONLN", _SC_NPROCESSORS_ONLN),
    ("_SC_PHYS_PAGES", _SC_PHYS_PAGES),
    ("_SC_AVPHYS_PAGES", _SC_AVPHYS_PAGES),
    ("_SC_ATEXIT_MAX", _SC_ATEXIT_MAX),
    ("_SC_PASS_MAX", _SC_PASS_MAX),
    ("_SC_XOPEN_VERSION", _SC_XOPEN_VERSION),
    ("_SC_XOPEN_XCU_VERSION", _SC_XOPEN_XCU_VERSION),
    ("_SC_XOPEN_UNIX", _SC_XOPEN_UNIX),
    ("_SC_XOPEN_CRYPT", _SC_XOPEN_CRYPT),
    ("_SC_XOPEN_ENH_I18N", _SC_XOPEN_ENH_I18N),
    ("_SC_XOPEN_SHM", _SC_XOPEN_SHM),
    ("_SC_2_CHAR_TERM", _SC_2_CHAR_TERM),
    ("_SC_2_UPE", _SC_2_UPE),
    ("_SC_XOPEN_XPG2", _SC_XOPEN_XPG2),
    ("_SC_XOPEN_XPG3", _SC_XOPEN_XPG3),
    ("_SC_XOPEN_XPG4", _SC_XOPEN_XPG4),
    ("_SC_NZERO", _SC_NZERO),
    ("_SC_XBS5_ILP32_OFF32", _SC_XBS5_ILP32_OFF32),
    ("_SC_XBS5_ILP32_OFFBIG", _SC_XBS5_ILP32_OFFBIG),
    ("_SC_XBS5_LP64_OFF64", _SC_XBS5_LP64_OFF64),
    ("_SC_XBS5_LPBIG_OFFBIG", _SC_XBS5_LPBIG_OFFBIG),
    ("_SC_XOPEN_LEGACY", _SC_XOPEN_LEGACY),
    ("_SC_XOPEN_REALTIME", _SC_XOPEN_REALTIME),
    ("_SC_XOPEN_REALTIME_THREADS", _SC_XOPEN_REALTIME_THREADS),
    ("_SC_ADVISORY_INFO", _SC_ADVISORY_INFO),
    ("_SC_BARRIERS", _SC_BARRIERS),
    ("_SC_CLOCK_SELECTION", _SC_CLOCK_SELECTION),
    ("_SC_CPUTIME", _SC_CPUTIME),
    ("_SC_THREAD_CPUTIME", _SC_THREAD_CPUTIME),
    ("_SC_MONOTONIC_CLOCK", _SC_MONOTONIC_CLOCK),
    ("_SC_READER_WRITER_LOCKS", _SC_READER_WRITER_LOCKS),
    ("_SC_SPIN_LOCKS", _SC_SPIN_LOCKS),
    ("_SC_REGEXP", _SC_REGEXP),
    ("_SC_SHELL", _SC_SHELL),
    ("_SC_SPAWN", _SC_SPAWN),
    ("_SC_SPORADIC_SERVER", _SC_SPORADIC_SERVER),
    ("_SC_THREAD_SPORADIC_SERVER", _SC_THREAD_SPORADIC_SERVER),
    ("_SC_TIMEOUTS", _SC_TIMEOUTS),
    ("_SC_TYPED_MEMORY_OBJECTS", _SC_TYPED_MEMORY_OBJECTS),
    ("_SC_2_PBS", _SC_2_PBS),
    ("_SC_2_PBS_ACCOUNTING", _SC_2_PBS_ACCOUNTING),
    ("_SC_2_PBS_LOCATE", _SC_2_PBS_LOCATE),
    ("_SC_2_PBS_MESSAGE", _SC_2_PBS_MESSAGE),
    ("_SC_2_PBS_TRACK", _SC_2_PBS_TRACK),
    ("_SC_SYMLOOP_MAX", _SC_SYMLOOP_MAX),
    ("_SC_STREAMS", _SC_STREAMS),
    ("_SC_2_PBS_CHECKPOINT", _SC_2_PBS_CHECKPOINT),
    ("_SC_V6_ILP32_OFF32", _SC_V6_ILP32_OFF32),
    ("_SC_V6_ILP32_OFFBIG", _SC_V6_ILP32_OFFBIG),
    ("_SC_V6_LP64_OFF64", _SC_V6_LP64_OFF64),
    ("_SC_V6_LPBIG_OFFBIG", _SC_V6_LPBIG_OFFBIG),
    ("_SC_HOST_NAME_MAX", _SC_HOST_NAME_MAX),
    ("_SC_TRACE", _SC_TRACE),
    ("_SC_TRACE_EVENT_FILTER", _SC_TRACE_EVENT_FILTER),
    ("_SC_TRACE_INHERIT", _SC_TRACE_INHERIT),
    ("_SC_TRACE_LOG", _SC_TRACE_LOG),
    ("_SC_IPV6", _SC_IPV6),
    ("_SC_RAW_SOCKETS", _SC_RAW_SOCKETS),
    ("_SC_V7_ILP32_OFF32", _SC_V7_ILP32_OFF32),
    ("_SC_V7_ILP32_OFFBIG", _SC_V7_ILP32_OFFBIG),
    ("_SC_V7_LP64_OFF64", _SC_V7_LP64_OFF64),
    ("_SC_V7_LPBIG_OFFBIG", _SC_V7_LPBIG_OFFBIG),
    ("_SC_SS_REPL_MAX", _SC_SS_REPL_MAX),
    ("_SC_TRACE_EVENT_NAME_MAX", _SC_TRACE_EVENT_NAME_MAX),
    ("_SC_TRACE_NAME_MAX", _SC_TRACE_NAME_MAX),
    ("_SC_TRACE_SYS_MAX", _SC_TRACE_SYS_MAX),
    ("_SC_TRACE_USER_EVENT_MAX", _SC_TRACE_USER_EVENT_MAX),
    ("_SC_XOPEN_STREAMS", _SC_XOPEN_STREAMS),
    ("_SC_THREAD_ROBUST_PRIO_INHERIT", _SC_THREAD_ROBUST_PRIO_INHERIT),
    ("_SC_THREAD_ROBUST_PRIO_PROTECT", _SC_THREAD_ROBUST_PRIO_PROTECT),
];

/// First spelling of a `_SC_*` value, if the name is known.
pub fn name_of(name: c_int) -> Option<&'static str> {
    SYSCONF_NAMES
        .iter()
        .find(|&&(_, value)| value == name)
        .map(|&(spelling, _)| spelling)
}

/// Answer a `sysconf` query.
///
/// # Returns
/// * `Ok(Some(value))` - the configured limit or capability
/// * `Ok(None)` - known name with no determinate limit
/// * `Err(Errno::Einval)` - unknown name
pub fn query(name: c_int) -> Result<Option<c_long>> {
    let value = match name {
        _SC_ARG_MAX => limits::ARG_MAX,
        _SC_CHILD_MAX => limits::CHILD_MAX,
        _SC_CLK_TCK => config::TICKS_PER_SEC,
        _SC_NGROUPS_MAX => limits::NGROUPS_MAX,
        _SC_OPEN_MAX => config::FILE_LIMIT,
        _SC_STREAM_MAX => limits::STREAM_MAX,
        _SC_TZNAME_MAX => limits::TZNAME_MAX,
        _SC_VERSION => limits::POSIX_VERSION,
        _SC_2_VERSION => limits::POSIX2_VERSION,
        _SC_PAGESIZE => config::PAGE_SIZE,
        _SC_LINE_MAX => limits::LINE_MAX,
        _SC_RE_DUP_MAX => limits::RE_DUP_MAX,
        _SC_IOV_MAX => limits::IOV_MAX,
        _SC_HOST_NAME_MAX => limits::HOST_NAME_MAX,
        _SC_LOGIN_NAME_MAX => limits::LOGIN_NAME_MAX,
        _SC_TTY_NAME_MAX => limits::TTY_NAME_MAX,
        _SC_SYMLOOP_MAX => config::SYMLOOP_MAX,
        _SC_NZERO => limits::NZERO,
        _SC_THREAD_STACK_MIN => limits::THREAD_STACK_MIN,
        _SC_NPROCESSORS_CONF | _SC_NPROCESSORS_ONLN => config::SMP,
        _SC_PHYS_PAGES => mm::phys_pages(),
        _SC_AVPHYS_PAGES => mm::avail_pages(),
        _SC_MONOTONIC_CLOCK => limits::POSIX_VERSION,
        #[cfg(feature = "fs")]
        _SC_FSYNC => limits::POSIX_VERSION,
        _ if name_of(name).is_some() => return Ok(None),
        _ => return Err(Errno::Einval),
    };
    Ok(Some(c_long::try_from(value).unwrap_or(c_long::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_values() {
        let expected: &[(&str, c_int)] = &[
            ("_SC_ARG_MAX", 0),
            ("_SC_CHILD_MAX", 1),
            ("_SC_CLK_TCK", 2),
            ("_SC_NGROUPS_MAX", 3),
            ("_SC_OPEN_MAX", 4),
            ("_SC_STREAM_MAX", 5),
            ("_SC_TZNAME_MAX", 6),
            ("_SC_JOB_CONTROL", 7),
            ("_SC_SAVED_IDS", 8),
            ("_SC_REALTIME_SIGNALS", 9),
            ("_SC_PRIORITY_SCHEDULING", 10),
            ("_SC_TIMERS", 11),
            ("_SC_ASYNCHRONOUS_IO", 12),
            ("_SC_PRIORITIZED_IO", 13),
            ("_SC_SYNCHRONIZED_IO", 14),
            ("_SC_FSYNC", 15),
            ("_SC_MAPPED_FILES", 16),
            ("_SC_MEMLOCK", 17),
            ("_SC_MEMLOCK_RANGE", 18),
            ("_SC_MEMORY_PROTECTION", 19),
            ("_SC_MESSAGE_PASSING", 20),
            ("_SC_SEMAPHORES", 21),
            ("_SC_SHARED_MEMORY_OBJECTS", 22),
            ("_SC_AIO_LISTIO_MAX", 23),
            ("_SC_AIO_MAX", 24),
            ("_SC_AIO_PRIO_DELTA_MAX", 25),
            ("_SC_DELAYTIMER_MAX", 26),
            ("_SC_MQ_OPEN_MAX", 27),
            ("_SC_MQ_PRIO_MAX", 28),
            ("_SC_VERSION", 29),
            ("_SC_PAGE_SIZE", 30),
            ("_SC_PAGESIZE", 30),
            ("_SC_RTSIG_MAX", 31),
            ("_SC_SEM_NSEMS_MAX", 32),
            ("_SC_SEM_VALUE_MAX", 33),
            ("_SC_SIGQUEUE_MAX", 34),
            ("_SC_TIMER_MAX", 35),
            ("_SC_BC_BASE_MAX", 36),
            ("_SC_BC_DIM_MAX", 37),
            ("_SC_BC_SCALE_MAX", 38),
            ("_SC_BC_STRING_MAX", 39),
            ("_SC_COLL_WEIGHTS_MAX", 40),
            ("_SC_EXPR_NEST_MAX", 42),
            ("_SC_LINE_MAX", 43),
            ("_SC_RE_DUP_MAX", 44),
            ("_SC_2_VERSION", 46),
            ("_SC_2_C_BIND", 47),
            ("_SC_2_C_DEV", 48),
            ("_SC_2_FORT_DEV", 49),
            ("_SC_2_FORT_RUN", 50),
            ("_SC_2_SW_DEV", 51),
            ("_SC_2_LOCALEDEF", 52),
            ("_SC_UIO_MAXIOV", 60),
            ("_SC_IOV_MAX", 60),
            ("_SC_THREADS", 67),
            ("_SC_THREAD_SAFE_FUNCTIONS", 68),
            ("_SC_GETGR_R_SIZE_MAX", 69),
            ("_SC_GETPW_R_SIZE_MAX", 70),
            ("_SC_LOGIN_NAME_MAX", 71),
            ("_SC_TTY_NAME_MAX", 72),
            ("_SC_THREAD_DESTRUCTOR_ITERATIONS", 73),
            ("_SC_THREAD_KEYS_MAX", 74),
            ("_SC_THREAD_STACK_MIN", 75),
            ("_SC_THREAD_THREADS_MAX", 76),
            ("_SC_THREAD_ATTR_STACKADDR", 77),
            ("_SC_THREAD_ATTR_STACKSIZE", 78),
            ("_SC_THREAD_PRIORITY_SCHEDULING", 79),
            ("_SC_THREAD_PRIO_INHERIT", 80),
            ("_SC_THREAD_PRIO_PROTECT", 81),
            ("_SC_THREAD_PROCESS_SHARED", 82),
            ("_SC_NPROCESSORS_CONF", 83),
            ("_SC_NPROCESSORS_ONLN", 84),
            ("_SC_PHYS_PAGES", 85),
            ("_SC_AVPHYS_PAGES", 86),
            ("_SC_ATEXIT_MAX", 87),
            ("_SC_PASS_MAX", 88),
            ("_SC_XOPEN_VERSION", 89),
            ("_SC_XOPEN_XCU_VERSION", 90),
            ("_SC_XOPEN_UNIX", 91),
            ("_SC_XOPEN_CRYPT", 92),
            ("_SC_XOPEN_ENH_I18N", 93),
            ("_SC_XOPEN_SHM", 94),
            ("_SC_2_CHAR_TERM", 95),
            ("_SC_2_UPE", 97),
            ("_SC_XOPEN_XPG2", 98),
            ("_SC_XOPEN_XPG3", 99),
            ("_SC_XOPEN_XPG4", 100),
            ("_SC_NZERO", 109),
            ("_SC_XBS5_ILP32_OFF32", 125),
            ("_SC_XBS5_ILP32_OFFBIG", 126),
            ("_SC_XBS5_LP64_OFF64", 127),
            ("_SC_XBS5_LPBIG_OFFBIG", 128),
            ("_SC_XOPEN_LEGACY", 129),
            ("_SC_XOPEN_REALTIME", 130),
            ("_SC_XOPEN_REALTIME_THREADS", 131),
            ("_SC_ADVISORY_INFO", 132),
            ("_SC_BARRIERS", 133),
            ("_SC_CLOCK_SELECTION", 137),
            ("_SC_CPUTIME", 138),
            ("_SC_THREAD_CPUTIME", 139),
            ("_SC_MONOTONIC_CLOCK", 149),
            ("_SC_READER_WRITER_LOCKS", 153),
            ("_SC_SPIN_LOCKS", 154),
            ("_SC_REGEXP", 155),
            ("_SC_SHELL", 157),
            ("_SC_SPAWN", 159),
            ("_SC_SPORADIC_SERVER", 160),
            ("_SC_THREAD_SPORADIC_SERVER", 161),
            ("_SC_TIMEOUTS", 164),
            ("_SC_TYPED_MEMORY_OBJECTS", 165),
            ("_SC_2_PBS", 168),
            ("_SC_2_PBS_ACCOUNTING", 169),
            ("_SC_2_PBS_LOCATE", 170),
            ("_SC_2_PBS_MESSAGE", 171),
            ("_SC_2_PBS_TRACK", 172),
            ("_SC_SYMLOOP_MAX", 173),
            ("_SC_STREAMS", 174),
            ("_SC_2_PBS_CHECKPOINT", 175),
            ("_SC_V6_ILP32_OFF32", 176),
            ("_SC_V6_ILP32_OFFBIG", 177),
            ("_SC_V6_LP64_OFF64", 178),
            ("_SC_V6_LPBIG_OFFBIG", 179),
            ("_SC_HOST_NAME_MAX", 180),
            ("_SC_TRACE", 181),
            ("_SC_TRACE_EVENT_FILTER", 182),
            ("_SC_TRACE_INHERIT", 183),
            ("_SC_TRACE_LOG", 184),
            ("_SC_IPV6", 235),
            ("_SC_RAW_SOCKETS", 236),
            ("_SC_V7_ILP32_OFF32", 237),
            ("_SC_V7_ILP32_OFFBIG", 238),
            ("_SC_V7_LP64_OFF64", 239),
            ("_SC_V7_LPBIG_OFFBIG", 240),
            ("_SC_SS_REPL_MAX", 241),
            ("_SC_TRACE_EVENT_NAME_MAX", 242),
            ("_SC_TRACE_NAME_MAX", 243),
            ("_SC_TRACE_SYS_MAX", 244),
            ("_SC_TRACE_USER_EVENT_MAX", 245),
            ("_SC_XOPEN_STREAMS", 246),
            ("_SC_THREAD_ROBUST_PRIO_INHERIT", 247),
            ("_SC_THREAD_ROBUST_PRIO_PROTECT", 248),
        ];
        assert_eq!(SYSCONF_NAMES.len(), expected.len());
        for (&(name, value), &(want_name, want_value)) in SYSCONF_NAMES.iter().zip(expected) {
            assert_eq!(name, want_name);
            assert_eq!(value, want_value, "{} has the wrong value", name);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(_SC_PAGE_SIZE, 30);
        assert_eq!(_SC_PAGESIZE, _SC_PAGE_SIZE);
        assert_eq!(_SC_UIO_MAXIOV, 60);
        assert_eq!(_SC_IOV_MAX, _SC_UIO_MAXIOV);
        assert_eq!(query(_SC_PAGE_SIZE), query(_SC_PAGESIZE));
        assert_eq!(query(_SC_UIO_MAXIOV), query(_SC_IOV_MAX));
        assert_eq!(name_of(30), Some("_SC_PAGE_SIZE"));
        assert_eq!(name_of(60), Some("_SC_UIO_MAXIOV"));
    }

    #[test]
    fn test_gaps_are_unknown() {
        for gap in [41, 45, 53, 59, 101, 124, 185, 234, 249, -1] {
            assert_eq!(name_of(gap), None);
            assert_eq!(query(gap), Err(Errno::Einval));
        }
    }

    #[test]
    fn test_tracked_values() {
        assert_eq!(query(_SC_PAGESIZE), Ok(Some(4096)));
        assert_eq!(query(_SC_CLK_TCK), Ok(Some(config::TICKS_PER_SEC as c_long)));
        assert_eq!(query(_SC_OPEN_MAX), Ok(Some(config::FILE_LIMIT as c_long)));
        assert_eq!(query(_SC_NPROCESSORS_ONLN), Ok(Some(config::SMP as c_long)));
        assert_eq!(query(_SC_NPROCESSORS_CONF), query(_SC_NPROCESSORS_ONLN));
        assert_eq!(query(_SC_SYMLOOP_MAX), Ok(Some(config::SYMLOOP_MAX as c_long)));
        assert_eq!(
            query(_SC_PHYS_PAGES),
            Ok(Some((config::PHYS_MEMORY_SIZE / config::PAGE_SIZE) as c_long))
        );
    }

    #[test]
    fn test_avphys_bounded_by_phys() {
        let phys = query(_SC_PHYS_PAGES).unwrap().unwrap();
        let avail = query(_SC_AVPHYS_PAGES).unwrap().unwrap();
        assert!(avail >= 0);
        assert!(avail <= phys);
    }

    #[test]
    fn test_untracked_is_indeterminate() {
        assert_eq!(query(_SC_JOB_CONTROL), Ok(None));
        assert_eq!(query(_SC_TRACE_LOG), Ok(None));
        assert_eq!(query(_SC_THREAD_ROBUST_PRIO_PROTECT), Ok(None));
    }

    #[test]
    fn test_fsync_follows_feature() {
        if cfg!(feature = "fs") {
            assert!(matches!(query(_SC_FSYNC), Ok(Some(_))));
        } else {
            assert_eq!(query(_SC_FSYNC), Ok(None));
        }
    }
}
