//! File signature entity
//!
//! A signature is the run of magic bytes at the very start of a file that
//! identifies its format. Each entry maps one byte pattern to one type.

use serde::Serialize;
use std::fmt;

/// Types of files the scanner can recognise from their header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// JPEG image (JFIF and Exif share the FF D8 FF prefix)
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (87a and 89a)
    Gif,
    /// Windows bitmap
    Bmp,
    /// TIFF image, "II" byte order
    TiffLittleEndian,
    /// TIFF image, "MM" byte order
    TiffBigEndian,
    /// MP3 audio with an ID3 tag
    Mp3,
    /// RealMedia container
    RealMedia,
    /// WAV audio
    Wav,
    /// PDF document
    Pdf,
    /// ZIP archive, which includes the OOXML office formats
    Zip,
    /// gzip stream
    Gzip,
    /// bzip2 stream
    Bzip,
    /// POSIX tar archive
    Tar,
    /// PE/MZ executable
    WindowsExecutable,
    /// ELF executable
    LinuxExecutable,
    /// Java class file
    JavaClass,
    /// ISO base media file (ftyp box)
    Mp4,
    /// QuickTime flavoured ftyp box
    Mp4Mov,
    /// Matroska container
    Matroska,
    /// No signature matched
    Unknown,
}

impl FileType {
    /// Returns the human-readable label used in reports
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Jpeg => "JPEG Image",
            FileType::Png => "PNG Image",
            FileType::Gif => "GIF Image",
            FileType::Bmp => "BMP Bitmap",
            FileType::TiffLittleEndian => "TIFF Image (Little Endian)",
            FileType::TiffBigEndian => "TIFF Image (Big Endian)",
            FileType::Mp3 => "MP3 Audio",
            FileType::RealMedia => "RealMedia",
            FileType::Wav => "WAV Audio",
            FileType::Pdf => "PDF Document",
            FileType::Zip => "ZIP Archive / Office Doc",
            FileType::Gzip => "GZIP Compressed File",
            FileType::Bzip => "BZIP Compressed File",
            FileType::Tar => "TAR Archive",
            FileType::WindowsExecutable => "Windows Executable",
            FileType::LinuxExecutable => "Linux Executable (ELF)",
            FileType::JavaClass => "Java Class File",
            FileType::Mp4 => "MP4 Video",
            FileType::Mp4Mov => "MP4 / MOV Video",
            FileType::Matroska => "MKV / WebM Video",
            FileType::Unknown => "Unknown",
        }
    }

    /// Returns true for the "no signature matched" sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, FileType::Unknown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the signature table: a header pattern and the type it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEntry {
    pattern: &'static [u8],
    file_type: FileType,
}

impl SignatureEntry {
    /// Creates a new entry. Usable in `const` tables.
    pub const fn new(pattern: &'static [u8], file_type: FileType) -> Self {
        Self { pattern, file_type }
    }

    /// Returns the magic bytes
    pub fn pattern(&self) -> &'static [u8] {
        self.pattern
    }

    /// Returns the file type this entry identifies
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Returns the pattern as uppercase hex, the way signature tables are
    /// usually written
    pub fn pattern_hex(&self) -> String {
        hex::encode_upper(self.pattern)
    }

    /// Checks if `data` begins with the full pattern
    pub fn matches_header(&self, data: &[u8]) -> bool {
        data.starts_with(self.pattern)
    }
}
