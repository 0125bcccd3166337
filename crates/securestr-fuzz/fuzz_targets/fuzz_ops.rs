#![no_main]
use libfuzzer_sys::fuzz_target;
use securestr_core::SecureStr;

// Drives the edit and search operations with arbitrary bytes and checks the
// structural invariants after every call: length bounded by capacity and a
// terminator directly after the content.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let cap = usize::from(data[0]);
    let split = usize::from(data[1]).min(data.len() - 2);
    let payload = &data[2..];
    let (first, second) = payload.split_at(split.min(payload.len()));

    let Ok(mut a) = SecureStr::with_capacity(cap) else {
        return;
    };
    let Ok(mut b) = SecureStr::with_capacity(cap / 2 + 1) else {
        return;
    };

    let _ = a.copy_from_bytes(first);
    let _ = b.copy_from_bytes(second);
    let _ = b.copy_from(&a);
    let _ = b.append_from(&a);
    let _ = b.append_byte(data[0]);
    let _ = b.substr_from(&a, usize::from(data[1]), usize::from(data[2]));
    let _ = b.append_substr_from(&a, usize::from(data[2]), usize::from(data[3]));
    let _ = a.index_of(&b);
    let _ = a.starts_with(&b);
    let _ = a.ends_with(&b);
    let _ = a.truncate(usize::from(data[3]));
    a.swap(&mut b);

    for s in [&a, &b] {
        assert!(s.len() <= s.capacity());
        assert_eq!(*s.as_bytes_with_nul().last().unwrap(), 0);
    }

    a.wipe();
    assert!(a.is_empty());
});
