use std::fs::File;
use std::io::Read;

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { string: &'a str },
    Owned { bytes: Vec<u8> },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    // Does nothing to check if the input file is valid utf8, the document decodes lossily.
    pub fn new_from_file(file_path: &std::path::Path) -> Result<SourceBuffer<'a>, mmap_rs::Error> {
        let file_name = file_path.to_string_lossy().into_owned();
        let file = File::open(file_path)?;
        let len = File::metadata(&file)?.len();

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Memory { string: "" }, file_name });
        }

        let len = usize::try_from(len)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let buffer = unsafe { mmap_rs::MmapOptions::new(len)?.with_file(&file, 0).map()? };
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name: String::from(name) }
    }

    pub fn new_from_stdin() -> std::io::Result<SourceBuffer<'a>> {
        SourceBuffer::new_from_reader(std::io::stdin().lock(), "<stdin>")
    }

    /// Reads everything from `reader` into an owned buffer. Like files, the bytes need not be
    /// valid utf8.
    pub fn new_from_reader<R: Read>(
        mut reader: R,
        name: &str,
    ) -> std::io::Result<SourceBuffer<'a>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(SourceBuffer { kind: SourceBufferKind::Owned { bytes }, file_name: String::from(name) })
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.kind {
            SourceBufferKind::File { buffer } => buffer.as_slice(),
            SourceBufferKind::Memory { string } => string.as_bytes(),
            SourceBufferKind::Owned { bytes } => bytes.as_slice(),
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
