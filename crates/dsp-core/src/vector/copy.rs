//! Memory motion: fills, copies and reversals

/// Fill `dst` with `value`
#[inline]
pub fn mem_set_w16(dst: &mut [i16], value: i16) {
    dst.fill(value);
}

/// Fill `dst` with `value`
#[inline]
pub fn mem_set_w32(dst: &mut [i32], value: i32) {
    dst.fill(value);
}

/// Zero `dst`, returning the number of samples written
#[inline]
pub fn zeros_array_w16(dst: &mut [i16]) -> usize {
    dst.fill(0);
    dst.len()
}

/// Zero `dst`, returning the number of samples written
#[inline]
pub fn zeros_array_w32(dst: &mut [i32]) -> usize {
    dst.fill(0);
    dst.len()
}

/// Fill `dst` with the integer 1, returning the number of samples written
#[inline]
pub fn ones_array_w16(dst: &mut [i16]) -> usize {
    dst.fill(1);
    dst.len()
}

/// Fill `dst` with the integer 1, returning the number of samples written
#[inline]
pub fn ones_array_w32(dst: &mut [i32]) -> usize {
    dst.fill(1);
    dst.len()
}

/// Copy the first `samples` elements of `src` into the start of `dst`
///
/// Returns the number of samples copied.
#[inline]
pub fn copy_from_begin<T: Copy>(src: &[T], samples: usize, dst: &mut [T]) -> usize {
    copy_from_mid(src, 0, samples, dst)
}

/// Copy `samples` elements of `src` starting at `offset`
#[inline]
pub fn copy_from_mid<T: Copy>(src: &[T], offset: usize, samples: usize, dst: &mut [T]) -> usize {
    debug_assert!(offset + samples <= src.len());
    debug_assert!(samples <= dst.len());
    dst[..samples].copy_from_slice(&src[offset..offset + samples]);
    samples
}

/// Copy the last `samples` elements of `src` into the start of `dst`
///
/// ```
/// use dsp_core::vector::copy_from_end;
/// let mut out = [0i16; 2];
/// assert_eq!(copy_from_end(&[0i16, 1, 2, 3], 2, &mut out), 2);
/// assert_eq!(out, [2, 3]);
/// ```
#[inline]
pub fn copy_from_end<T: Copy>(src: &[T], samples: usize, dst: &mut [T]) -> usize {
    debug_assert!(samples <= src.len());
    copy_from_mid(src, src.len() - samples, samples, dst)
}

/// Write `first` followed by `second` into `dst`
///
/// Returns the total number of samples written.
pub fn concat<T: Copy>(first: &[T], second: &[T], dst: &mut [T]) -> usize {
    let total = first.len() + second.len();
    debug_assert!(total <= dst.len());
    dst[..first.len()].copy_from_slice(first);
    dst[first.len()..total].copy_from_slice(second);
    total
}

/// Overwrite `dst[offset..offset + src.len()]` with `src`
#[inline]
pub fn replace_in_middle<T: Copy>(dst: &mut [T], offset: usize, src: &[T]) {
    debug_assert!(offset + src.len() <= dst.len());
    dst[offset..offset + src.len()].copy_from_slice(src);
}

/// Copy `src` into `dst` in reverse order: `dst[len - 1 - i] = src[i]`
pub fn mem_cpy_reversed_order(dst: &mut [i16], src: &[i16]) {
    debug_assert!(dst.len() >= src.len());
    for (out, &sample) in dst[..src.len()].iter_mut().rev().zip(src) {
        *out = sample;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills() {
        let mut b16 = [0i16; 4];
        let mut b32 = [0i32; 4];

        mem_set_w16(&mut b16, 3);
        assert_eq!(b16, [3; 4]);
        assert_eq!(zeros_array_w16(&mut b16), 4);
        assert_eq!(b16, [0; 4]);
        assert_eq!(ones_array_w16(&mut b16), 4);
        assert_eq!(b16, [1; 4]);

        mem_set_w32(&mut b32, 3);
        assert_eq!(b32, [3; 4]);
        assert_eq!(zeros_array_w32(&mut b32), 4);
        assert_eq!(b32, [0; 4]);
        assert_eq!(ones_array_w32(&mut b32), 4);
        assert_eq!(b32, [1; 4]);

        assert_eq!(zeros_array_w16(&mut []), 0);
    }

    #[test]
    fn test_copies() {
        let src = [0i16, 1, 2, 3];
        let mut dst = [0i16; 4];

        assert_eq!(copy_from_begin(&src, 4, &mut dst), 4);
        assert_eq!(dst, src);

        let mut dst = [0i16; 2];
        assert_eq!(copy_from_end(&src, 2, &mut dst), 2);
        assert_eq!(dst, [2, 3]);

        assert_eq!(copy_from_mid(&src, 1, 2, &mut dst), 2);
        assert_eq!(dst, [1, 2]);

        let mut words = [0i32; 3];
        assert_eq!(copy_from_end(&[7i32, 8, 9, 10], 3, &mut words), 3);
        assert_eq!(words, [8, 9, 10]);
    }

    #[test]
    fn test_concat_and_replace() {
        let mut dst = [0i16; 6];
        assert_eq!(concat(&[1, 2], &[3, 4, 5], &mut dst), 5);
        assert_eq!(dst, [1, 2, 3, 4, 5, 0]);

        replace_in_middle(&mut dst, 2, &[-1, -1]);
        assert_eq!(dst, [1, 2, -1, -1, 5, 0]);
    }

    #[test]
    fn test_mem_cpy_reversed_order() {
        let src = [4i16, 12, 133, 1100];
        let mut dst = [0i16; 4];
        mem_cpy_reversed_order(&mut dst, &src);
        assert_eq!(dst, [1100, 133, 12, 4]);
    }
}
