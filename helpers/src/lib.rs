pub mod buffer;
pub mod general;
pub mod geometry;

#[cfg(test)]
mod buffer_tests {
    use crate::buffer::{HistoryBuffer, RingBuffer};
    use approx::assert_ulps_eq;

    #[test]
    fn test_ringbuffer_1() {
        let x: RingBuffer<i32> = RingBuffer::new(5);
        assert!(x.get_avg().is_none());
    }
    #[test]
    fn test_ringbuffer_2() {
        let mut x: RingBuffer<i32> = RingBuffer::new(5);
        x.push(3);
        x.push(4);
        assert_ulps_eq!(x.get_avg().unwrap(), 3.5);
    }
    #[test]
    fn test_ringbuffer_3() {
        let mut x: RingBuffer<i32> = RingBuffer::new(5);
        x.push(3);
        x.push(4);
        x.push(2);
        x.push(1);
        x.push(5);
        x.push(10);
        assert_ulps_eq!(x.get_avg().unwrap(), 4.4);
    }

    #[test]
    fn test_historybuffer_empty() {
        let x: HistoryBuffer<u32> = HistoryBuffer::new(5);
        assert!(x.is_empty());
        assert_eq!(x.as_ordered_vec(), Vec::<u32>::new());
    }
    #[test]
    fn test_historybuffer_partially_filled() {
        let mut x: HistoryBuffer<u32> = HistoryBuffer::new(5);
        x.push(1);
        x.push(2);
        x.push(3);
        assert_eq!(x.len(), 3);
        assert_eq!(x.as_ordered_vec(), vec![1, 2, 3]);
    }
    #[test]
    fn test_historybuffer_overwrites_oldest() {
        let mut x: HistoryBuffer<u32> = HistoryBuffer::new(3);
        for val in 1..=7 {
            x.push(val);
        }
        assert_eq!(x.len(), 3);
        assert_eq!(x.as_ordered_vec(), vec![5, 6, 7]);
    }
    #[test]
    fn test_historybuffer_clear() {
        let mut x: HistoryBuffer<u32> = HistoryBuffer::new(3);
        for val in 1..=5 {
            x.push(val);
        }
        x.clear();
        assert!(x.is_empty());
        x.push(8);
        assert_eq!(x.as_ordered_vec(), vec![8]);
    }
}

#[cfg(test)]
mod general_tests {
    use crate::general::lin_interp;
    use approx::assert_ulps_eq;

    #[test]
    fn test_lin_interp_1() {
        let xp: Vec<f64> = vec![-5.0, 0.0, 5.0, 10.0];
        let fp: Vec<f64> = vec![1.0, 2.0, 1.0, 0.0];
        assert_ulps_eq!(lin_interp(-2.5, &xp, &fp), 1.5);
    }
    #[test]
    fn test_lin_interp_2() {
        let xp: Vec<f64> = vec![-5.0, 0.0, 5.0, 10.0];
        let fp: Vec<f64> = vec![1.0, 2.0, 1.0, 0.0];
        assert_ulps_eq!(lin_interp(7.5, &xp, &fp), 0.5);
    }
    #[test]
    fn test_lin_interp_3() {
        let xp: Vec<f64> = vec![-5.0, 0.0, 5.0, 10.0];
        let fp: Vec<f64> = vec![-1.0, -2.0, -1.0, 0.0];
        assert_ulps_eq!(lin_interp(7.5, &xp, &fp), -0.5);
    }
}
