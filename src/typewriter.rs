//! Reveals a message one character per tick.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypewriterTick {
    Reveal(String),
    Finished,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    message: Vec<char>,
    revealed: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.chars().collect(),
            revealed: 0,
            finished: false,
        }
    }

    /// Tick `n` (1-based, `n <= len`) reveals the first `n` characters. The tick
    /// after the full message is shown reports `Finished`, and every later tick too.
    pub fn tick(&mut self) -> TypewriterTick {
        if self.finished || self.revealed >= self.message.len() {
            self.finished = true;
            return TypewriterTick::Finished;
        }

        self.revealed += 1;
        TypewriterTick::Reveal(self.visible())
    }

    pub fn visible(&self) -> String {
        self.message[..self.revealed].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.message.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGLINE: &str = "Full Stack Developer | Game Dev Enthusiast | UI/UX Intern";

    #[test]
    fn each_tick_reveals_one_more_character() {
        let mut typewriter = Typewriter::new(TAGLINE);
        for n in 1..=TAGLINE.len() {
            let expected: String = TAGLINE.chars().take(n).collect();
            assert_eq!(typewriter.tick(), TypewriterTick::Reveal(expected));
        }
        assert_eq!(typewriter.visible(), TAGLINE);
        assert!(!typewriter.is_finished());
    }

    #[test]
    fn finishes_on_tick_after_full_message_and_stays_finished() {
        let mut typewriter = Typewriter::new("abc");
        let ticks: Vec<TypewriterTick> = (0..5).map(|_| typewriter.tick()).collect();

        assert_eq!(ticks[2], TypewriterTick::Reveal("abc".to_string()));
        assert_eq!(ticks[3], TypewriterTick::Finished);
        assert_eq!(ticks[4], TypewriterTick::Finished);
        assert_eq!(typewriter.visible(), "abc");
    }

    #[test]
    fn replacement_run_starts_blank_and_unfinished() {
        let mut first = Typewriter::new("ab");
        while first.tick() != TypewriterTick::Finished {}
        assert!(first.is_finished());

        let mut second = Typewriter::new("xyz");
        assert_eq!(second.visible(), "");
        assert!(!second.is_finished());
        assert_eq!(second.tick(), TypewriterTick::Reveal("x".to_string()));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new("né");
        assert_eq!(typewriter.len(), 2);
        typewriter.tick();
        assert_eq!(typewriter.tick(), TypewriterTick::Reveal("né".to_string()));
    }

    #[test]
    fn empty_message_finishes_immediately() {
        let mut typewriter = Typewriter::new("");
        assert!(typewriter.is_empty());
        assert_eq!(typewriter.tick(), TypewriterTick::Finished);
    }
}
