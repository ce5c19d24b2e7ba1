use futures::{ready, Stream};
use log::{debug, trace};
use pin_project_lite::pin_project;

use core::pin::Pin;
use core::task::{Context, Poll};

use crate::{interpreter::Interpreter, types::Frame, Error};

pub trait LineStreamExt: Stream {
    /// Compiles every line of this stream with `interpreter`.
    fn frames(self, interpreter: Interpreter) -> Frames<Self>
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        Frames::new(self, interpreter)
    }
}
impl<T: ?Sized> LineStreamExt for T where T: Stream {}

pin_project! {
    /// Stream of the frames compiled from a stream of lines.
    ///
    /// Lines that only change the machine state produce no item. A rejected line yields its error
    /// and compilation resumes with the next line.
    pub struct Frames<S> {
        #[pin]
        lines: S,
        interpreter: Interpreter,
    }
}

impl<S> Frames<S>
where
    S: Stream,
    S::Item: AsRef<str>,
{
    pub fn new(lines: S, interpreter: Interpreter) -> Self {
        Self { lines, interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn into_inner(self) -> (S, Interpreter) {
        (self.lines, self.interpreter)
    }
}

impl<S> Stream for Frames<S>
where
    S: Stream,
    S::Item: AsRef<str>,
{
    type Item = Result<Frame, Error>;

    fn poll_next(self: Pin<&mut Self>, ctx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            let line = match ready!(this.lines.as_mut().poll_next(ctx)) {
                Some(line) => line,
                None => return Poll::Ready(None),
            };
            let line = line.as_ref();
            match this.interpreter.execute(line) {
                Ok(Some(frame)) => {
                    trace!("{:?}: {}", line, frame);
                    return Poll::Ready(Some(Ok(frame)));
                }
                Ok(None) => trace!("{:?}: state only", line),
                Err(e) => {
                    debug!("{:?} rejected: {}", line, e);
                    return Poll::Ready(Some(Err(e)));
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::LineStreamExt;
    use crate::{Error, Interpreter};
    use alloc::vec::Vec;
    use futures::stream::{self, StreamExt};

    #[test]
    fn state_only_lines_produce_no_item() {
        let lines = ["G0 X1.4 Y1.2123", "G91", "G0 X1.4"];
        let frames: Vec<_> = futures_executor::block_on(
            stream::iter(lines)
                .frames(Interpreter::new())
                .map(|res| res.map(|frame| frame.into_bytes()))
                .collect(),
        );
        assert_eq!(
            frames,
            [
                Ok(alloc::vec![5, 0x31, 0, 12, 0, 140]),
                Ok(alloc::vec![3, 0x21, 1, 24])
            ]
        );
    }

    #[test]
    fn errors_do_not_stop_the_stream() {
        let lines = ["G0 X1", "G7", "M102"];
        let mut strm = stream::iter(lines).frames(Interpreter::new());

        let results: Vec<_> = futures_executor::block_on((&mut strm).collect());
        assert_eq!(results.len(), 3);
        assert_eq!(results[1], Err(Error::UnknownCommand("G7".into())));
        assert_eq!(results[2].as_ref().map(|f| f.as_bytes()), Ok(&[1u8, 0][..]));
        assert_eq!(strm.interpreter().state().x, 100.);
    }

    #[test]
    fn the_session_can_be_recovered() {
        let lines = alloc::vec![
            alloc::string::String::from("G91"),
            alloc::string::String::from("G0 X1"),
        ];
        let mut strm = stream::iter(lines).frames(Interpreter::new());
        let frames: Vec<_> = futures_executor::block_on((&mut strm).collect());
        assert_eq!(frames.len(), 1);

        let (_, interpreter) = strm.into_inner();
        assert!(interpreter.state().relative);
        assert_eq!(interpreter.state().x, 100.);
    }
}
