macro_rules! try_opt {
    ($expr: expr) => {
        match $expr {
            Ok(item) => item,
            Err(e) => return Some(Err(::std::convert::From::from(e))),
        }
    };
}

/// Removes leading and trailing ASCII whitespace (including line ends)
#[inline]
pub(crate) fn trim_space(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |p| p + 1);
    &line[start..end]
}

/// Appends `line` to `out` with all ASCII whitespace removed
#[inline]
pub(crate) fn extend_stripped(out: &mut Vec<u8>, line: &[u8]) {
    if memchr::memchr3(b' ', b'\t', b'\r', line).is_none() && !line.contains(&b'\x0c') {
        out.extend_from_slice(line);
        return;
    }
    out.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
}

/// Splits a trimmed header (without its prefix) into the name, which is the
/// text up to the first whitespace run, and an optional description.
#[inline]
pub(crate) fn split_head(head: &[u8]) -> (&[u8], Option<&[u8]>) {
    match head.iter().position(|b| *b == b' ' || *b == b'\t') {
        Some(mark) => {
            let rest = &head[mark..];
            let skip = rest
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(rest.len());
            let desc = &rest[skip..];
            (&head[..mark], if desc.is_empty() { None } else { Some(desc) })
        }
        None => (head, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim() {
        assert_eq!(trim_space(b"ab\r\n"), b"ab");
        assert_eq!(trim_space(b"ab\r"), b"ab");
        assert_eq!(trim_space(b"ab"), b"ab");
        assert_eq!(trim_space(b"  a b \t\r\n"), b"a b");
        assert_eq!(trim_space(b" \t "), b"");
        assert_eq!(trim_space(b""), b"");
    }

    #[test]
    fn strip() {
        let mut out = b"AC".to_vec();
        extend_stripped(&mut out, b"G T\tA");
        assert_eq!(out, b"ACGTA");
        extend_stripped(&mut out, b"CC");
        assert_eq!(out, b"ACGTACC");
    }

    #[test]
    fn head() {
        assert_eq!(split_head(b"id"), (&b"id"[..], None));
        assert_eq!(split_head(b"id desc"), (&b"id"[..], Some(&b"desc"[..])));
        assert_eq!(
            split_head(b"id \t some desc"),
            (&b"id"[..], Some(&b"some desc"[..]))
        );
        assert_eq!(split_head(b"id\tx y"), (&b"id"[..], Some(&b"x y"[..])));
    }
}
