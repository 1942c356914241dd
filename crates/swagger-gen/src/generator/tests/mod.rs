mod enums;
mod refs;
mod support;
